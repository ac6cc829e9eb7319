use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const SEARCH_PAGE: RouteComponent = RouteComponent::new("SearchPage", |_| html!(<SearchPage/>));

pub const SHOW_MESSAGE_PAGE: RouteComponent = RouteComponent::new("ShowMessagePage", |ctx| {
    html!(<ShowMessagePage index={ctx.param("index")} message_id={ctx.param("messageId")}/>)
});

pub const SOURCES_PAGE: RouteComponent =
    RouteComponent::new("SourcesPage", |_| html!(<SourcesPage/>));

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    html!(
        <>
            { title_section("Search") }
            <PageSection>
                <Content>
                    <p>{"Results for the current query show up here, newest first."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct ShowMessageProps {
    pub index: AttrValue,
    pub message_id: AttrValue,
}

/// A single message, addressed by the index it was stored in.
#[function_component(ShowMessagePage)]
pub fn show_message_page(props: &ShowMessageProps) -> Html {
    html!(
        <>
            { title_section("Message") }
            <PageSection>
                <Content>
                    <p>{format!("Message {} in index {}.", props.message_id, props.index)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(SourcesPage)]
pub fn sources_page() -> Html {
    html!(
        <>
            { title_section("Sources") }
            <PageSection>
                <Content>
                    <p>{"Hosts that sent messages within the selected time range."}</p>
                </Content>
            </PageSection>
        </>
    )
}
