use std::rc::Rc;

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::console::Console;
use crate::routing::PluginRegistry;

#[derive(Clone, PartialEq, Properties)]
pub struct ApplicationProps {
    pub config: AppConfig,
    pub plugins: Rc<PluginRegistry>,
}

#[function_component(Application)]
pub fn app(props: &ApplicationProps) -> Html {
    html!(
        <ToastViewer>
            <BackdropViewer>
                <Console config={props.config.clone()} plugins={props.plugins.clone()}/>
            </BackdropViewer>
        </ToastViewer>
    )
}
