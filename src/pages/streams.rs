use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const STREAMS_PAGE: RouteComponent =
    RouteComponent::new("StreamsPage", |_| html!(<StreamsPage/>));

pub const STREAM_SEARCH_PAGE: RouteComponent = RouteComponent::new("StreamSearchPage", |ctx| {
    html!(<StreamSearchPage stream_id={ctx.param("streamId")}/>)
});

pub const STREAM_EDIT_PAGE: RouteComponent = RouteComponent::new("StreamEditPage", |ctx| {
    html!(<StreamEditPage stream_id={ctx.param("streamId")}/>)
});

pub const STREAM_OUTPUTS_PAGE: RouteComponent = RouteComponent::new("StreamOutputsPage", |ctx| {
    html!(<StreamOutputsPage stream_id={ctx.param("streamId")}/>)
});

pub const STREAM_ALERTS_PAGE: RouteComponent = RouteComponent::new("StreamAlertsPage", |ctx| {
    html!(<StreamAlertsPage stream_id={ctx.param("streamId")}/>)
});

#[function_component(StreamsPage)]
pub fn streams_page() -> Html {
    html!(
        <>
            { title_section("Streams") }
            <PageSection>
                <Content>
                    <p>{"Streams route incoming messages into categories in real time."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct StreamProps {
    pub stream_id: AttrValue,
}

#[function_component(StreamSearchPage)]
pub fn stream_search_page(props: &StreamProps) -> Html {
    html!(
        <>
            { title_section("Stream search") }
            <PageSection>
                <Content>
                    <p>{format!("Searching within stream {}.", props.stream_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(StreamEditPage)]
pub fn stream_edit_page(props: &StreamProps) -> Html {
    html!(
        <>
            { title_section("Stream rules") }
            <PageSection>
                <Content>
                    <p>{format!("Rules deciding which messages are routed into stream {}.", props.stream_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(StreamOutputsPage)]
pub fn stream_outputs_page(props: &StreamProps) -> Html {
    html!(
        <>
            { title_section("Stream outputs") }
            <PageSection>
                <Content>
                    <p>{format!("Outputs attached to stream {}.", props.stream_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(StreamAlertsPage)]
pub fn stream_alerts_page(props: &StreamProps) -> Html {
    html!(
        <>
            { title_section("Stream alerts") }
            <PageSection>
                <Content>
                    <p>{format!("Alert conditions and triggered alerts for stream {}.", props.stream_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}
