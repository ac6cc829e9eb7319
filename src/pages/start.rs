use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const START_PAGE: RouteComponent = RouteComponent::new("StartPage", |_| html!(<StartPage/>));

pub const GETTING_STARTED_PAGE: RouteComponent =
    RouteComponent::new("GettingStartedPage", |_| html!(<GettingStartedPage/>));

/// Landing page for the index route.
#[function_component(StartPage)]
pub fn start_page() -> Html {
    html!(
        <>
            { title_section("Welcome to Driftlog") }
            <PageSection>
                <Content>
                    <p>{"Pick a stream or dashboard from the navigation, or start searching right away."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(GettingStartedPage)]
pub fn getting_started_page() -> Html {
    html!(
        <>
            { title_section("Getting started") }
            <PageSection>
                <Content>
                    <p>{"A short tour through sending, routing and searching log messages."}</p>
                </Content>
            </PageSection>
        </>
    )
}
