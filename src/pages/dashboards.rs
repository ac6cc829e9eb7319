use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const DASHBOARDS_PAGE: RouteComponent =
    RouteComponent::new("DashboardsPage", |_| html!(<DashboardsPage/>));

pub const SHOW_DASHBOARD_PAGE: RouteComponent = RouteComponent::new("ShowDashboardPage", |ctx| {
    html!(<ShowDashboardPage dashboard_id={ctx.param("dashboardId")}/>)
});

#[function_component(DashboardsPage)]
pub fn dashboards_page() -> Html {
    html!(
        <>
            { title_section("Dashboards") }
            <PageSection>
                <Content>
                    <p>{"Saved dashboards, shared with everyone on this cluster."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct ShowDashboardProps {
    pub dashboard_id: AttrValue,
}

#[function_component(ShowDashboardPage)]
pub fn show_dashboard_page(props: &ShowDashboardProps) -> Html {
    html!(
        <>
            { title_section("Dashboard") }
            <PageSection>
                <Content>
                    <p>{format!("Widgets of dashboard {}.", props.dashboard_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}
