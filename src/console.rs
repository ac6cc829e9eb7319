use std::rc::Rc;

use gloo_history::{AnyHistory, BrowserHistory, History};
use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::routing::{build_route_tree, paths, PluginRegistry, RoutePrefix, Router};

#[derive(Clone, PartialEq, Properties)]
pub struct ConsoleProps {
    pub config: AppConfig,
    pub plugins: Rc<PluginRegistry>,
}

#[function_component(Console)]
pub fn console(props: &ConsoleProps) -> Html {
    let history = use_memo(|_| AnyHistory::from(BrowserHistory::new()), ());
    let history = (*history).clone();

    // Built once; neither navigation nor re-renders touch it again.
    let tree = use_memo(
        |(config, plugins)| build_route_tree(&RoutePrefix::new(&config.path_prefix), plugins),
        (props.config.clone(), props.plugins.clone()),
    );

    let logo = html!(
        <Brand src="images/logo-inverted.png" alt="Driftlog Logo" />
    );

    let sidebar = html_nested!(
        <PageSidebar>
            <Nav>
                <NavList>
                    <NavExpandable title="Search">
                        <NavLink to={paths::SEARCH}>{ "Search" }</NavLink>
                        <NavLink to={paths::SOURCES}>{ "Sources" }</NavLink>
                        <NavLink to={paths::GETTING_STARTED}>{ "Getting Started" }</NavLink>
                    </NavExpandable>
                    <NavExpandable title="Streams">
                        <NavLink to={paths::STREAMS}>{ "Overview" }</NavLink>
                        <NavLink to={paths::ALERTS}>{ "Alerts" }</NavLink>
                    </NavExpandable>
                    <NavExpandable title="Dashboards">
                        <NavLink to={paths::DASHBOARDS}>{ "Overview" }</NavLink>
                    </NavExpandable>
                    <NavExpandable title="System">
                        <NavLink to={paths::system::OVERVIEW}>{ "Overview" }</NavLink>
                        <NavLink to={paths::system::nodes::LIST}>{ "Nodes" }</NavLink>
                        <NavLink to={paths::system::INPUTS}>{ "Inputs" }</NavLink>
                        <NavLink to={paths::system::OUTPUTS}>{ "Outputs" }</NavLink>
                        <NavLink to={paths::system::indices::LIST}>{ "Indices" }</NavLink>
                        <NavLink to={paths::system::LOGGING}>{ "Logging" }</NavLink>
                        <NavLink to={paths::system::authentication::OVERVIEW}>{ "Authentication" }</NavLink>
                        <NavLink to={paths::system::contentpacks::LIST}>{ "Content Packs" }</NavLink>
                        <NavLink to={paths::system::GROKPATTERNS}>{ "Grok Patterns" }</NavLink>
                        <NavLink to={paths::system::CONFIGURATIONS}>{ "Configurations" }</NavLink>
                    </NavExpandable>
                    <NavItem to="https://docs.driftlog.io/" target="_blank">{ "Documentation" } <ExtLinkIcon/> </NavItem>
                </NavList>
            </Nav>
        </PageSidebar>
    );

    let callback_help = use_open("https://docs.driftlog.io/", "_blank");
    let callback_github = use_open("https://github.com/driftlog/driftlog", "_blank");

    let tools = html!(
        <Toolbar>
            <ToolbarItem>
                <Button icon={Icon::QuestionCircle} onclick={callback_help}/>
            </ToolbarItem>
            <ToolbarItem>
                <Button icon={Icon::Github} onclick={callback_github}/>
            </ToolbarItem>
        </Toolbar>
    );

    html!(
        <ContextProvider<AnyHistory> context={history.clone()}>
            <Page {logo} {sidebar} {tools}>
                <Router {tree} {history}/>
            </Page>
        </ContextProvider<AnyHistory>>
    )
}

#[derive(Clone, PartialEq, Properties)]
pub struct NavLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Sidebar entry routing through the shared history instead of a full
/// page load.
#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let history = use_context::<AnyHistory>();

    let onclick = use_callback(
        |e: MouseEvent, (history, to)| {
            e.prevent_default();
            if let Some(history) = history {
                history.push(to.to_string());
            }
        },
        (history, props.to.clone()),
    );

    html!(
        <li class="pf-c-nav__item">
            <a class="pf-c-nav__link" href={props.to.clone()} {onclick}>
                { for props.children.iter() }
            </a>
        </li>
    )
}

#[hook]
fn use_open<IN>(url: impl Into<String>, target: impl Into<String>) -> Callback<IN, ()>
where
    IN: 'static,
{
    use_callback(
        |_, (url, target)| {
            let _ = gloo_utils::window().open_with_url_and_target(url, target);
        },
        (url.into(), target.into()),
    )
}

#[function_component(ExtLinkIcon)]
fn ext_link_icon() -> Html {
    html!(<span class="pf-u-icon-color-light pf-u-ml-sm pf-u-font-size-sm">{ Icon::ExternalLinkAlt }</span>)
}
