use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const ALERTS_PAGE: RouteComponent = RouteComponent::new("AlertsPage", |_| html!(<AlertsPage/>));

pub const SHOW_ALERT_PAGE: RouteComponent = RouteComponent::new("ShowAlertPage", |ctx| {
    html!(<ShowAlertPage alert_id={ctx.param("alertId")}/>)
});

#[function_component(AlertsPage)]
pub fn alerts_page() -> Html {
    html!(
        <>
            { title_section("Alerts") }
            <PageSection>
                <Content>
                    <p>{"Triggered alerts across all streams, most recent first."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct ShowAlertProps {
    pub alert_id: AttrValue,
}

#[function_component(ShowAlertPage)]
pub fn show_alert_page(props: &ShowAlertProps) -> Html {
    html!(
        <>
            { title_section("Alert") }
            <PageSection>
                <Content>
                    <p>{format!("Details for alert {}.", props.alert_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}
