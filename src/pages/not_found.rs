use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const NOT_FOUND_PAGE: RouteComponent =
    RouteComponent::new("NotFoundPage", |_| html!(<NotFoundPage/>));

/// Mounted by the wildcard route when nothing else matched.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html!(
        <>
            { title_section("Page not found") }
            <PageSection>
                <Content>
                    <p>{"The page you were looking for does not exist."}</p>
                </Content>
            </PageSection>
        </>
    )
}
