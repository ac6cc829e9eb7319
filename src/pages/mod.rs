//! Pages of the console. Each page exposes a [`RouteComponent`] constant
//! the route table refers to; rendering stays scaffolding-level here, the
//! data behind a page is loaded by the page itself once it grows one.

use patternfly_yew::prelude::*;
use yew::prelude::*;

mod alerts;
mod auth;
mod dashboards;
mod inputs;
mod not_found;
mod search;
mod start;
mod streams;
mod system;

pub use alerts::*;
pub use auth::*;
pub use dashboards::*;
pub use inputs::*;
pub use not_found::*;
pub use search::*;
pub use start::*;
pub use streams::*;
pub use system::*;

fn title_section(title: &str) -> Html {
    html!(
        <PageSection variant={PageSectionVariant::Light}>
            <Title>{title.to_string()}</Title>
        </PageSection>
    )
}
