//! Chrome shared between pages: the root frame plus the two content
//! layouts, distinguished by whether they carry the persistent search bar.

use gloo_history::{AnyHistory, History};
use patternfly_yew::{next::TextInput, prelude::*};
use serde::Serialize;
use yew::prelude::*;

use crate::routing::{paths, RouteComponent};

pub const APP: RouteComponent =
    RouteComponent::new("App", |ctx| html!(<App>{ctx.children.clone()}</App>));

pub const APP_WITH_SEARCH_BAR: RouteComponent = RouteComponent::new("AppWithSearchBar", |ctx| {
    html!(<AppWithSearchBar>{ctx.children.clone()}</AppWithSearchBar>)
});

pub const APP_WITHOUT_SEARCH_BAR: RouteComponent =
    RouteComponent::new("AppWithoutSearchBar", |ctx| {
        html!(<AppWithoutSearchBar>{ctx.children.clone()}</AppWithoutSearchBar>)
    });

#[derive(Clone, PartialEq, Properties)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(App)]
pub fn app(props: &LayoutProps) -> Html {
    html!(
        <>
            { for props.children.iter() }
            <PageSection variant={PageSectionVariant::Darker}>
                {"Copyright © 2026 "} <a href="https://github.com/driftlog/driftlog" target="_blank"> {"The Driftlog Project"} </a> {"."}
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Default, Serialize)]
struct SearchQuery {
    q: String,
}

#[function_component(AppWithSearchBar)]
pub fn app_with_search_bar(props: &LayoutProps) -> Html {
    let history = use_context::<AnyHistory>();
    let query = use_state_eq(String::new);

    let onchange = use_callback(|text: String, query| query.set(text), query.clone());

    let onclick = use_callback(
        |_, (history, query)| {
            if let Some(history) = history {
                let query = SearchQuery {
                    q: (**query).clone(),
                };
                if let Err(err) = history.push_with_query(paths::SEARCH, query) {
                    log::warn!("failed to navigate to search: {err}");
                }
            }
        },
        (history, query.clone()),
    );

    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Toolbar>
                    <ToolbarItem>
                        <TextInput {onchange}
                            value={(*query).clone()}
                            placeholder="Search in all messages"
                        />
                    </ToolbarItem>
                    <ToolbarItem>
                        <Button label="Search" variant={ButtonVariant::Primary} {onclick}/>
                    </ToolbarItem>
                </Toolbar>
            </PageSection>
            { for props.children.iter() }
        </>
    )
}

#[function_component(AppWithoutSearchBar)]
pub fn app_without_search_bar(props: &LayoutProps) -> Html {
    html!({ for props.children.iter() })
}
