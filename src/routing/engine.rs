use std::rc::Rc;

use gloo_history::{AnyHistory, History};
use yew::prelude::*;

use super::node::{RouteComponent, RouteContext, RouteNode, RouteParams, RouteTree};

/// Outcome of resolving a location against the route table.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'t> {
    /// Component chain from the root layout down to the matched leaf,
    /// plus every named segment captured along the way.
    Matched {
        chain: Vec<&'t RouteComponent>,
        params: RouteParams,
    },
    /// The path hit the redirect table; match again at `to`.
    Redirect { to: String },
}

/// Resolves `path`, applying the redirect table before any tree matching.
///
/// Matching is first-match in declaration order, segment-wise; a `:name`
/// template segment captures exactly one path segment. Returns `None` only
/// when the tree lacks a wildcard, which the builder never produces.
pub fn resolve<'t>(tree: &'t RouteTree, path: &str) -> Option<Resolution<'t>> {
    for redirect in &tree.redirects {
        if let Some(params) = match_template(&redirect.from, path) {
            return Some(Resolution::Redirect {
                to: expand_template(&redirect.to, &params),
            });
        }
    }

    match_node(&tree.root, path).map(|(chain, params)| Resolution::Matched { chain, params })
}

/// Renders a matched chain by folding leaf-to-root, handing each component
/// the already-rendered subtree below it.
pub fn mount(chain: &[&RouteComponent], params: &RouteParams) -> Html {
    chain.iter().rev().fold(Html::default(), |children, component| {
        component.mount(&RouteContext {
            params: params.clone(),
            children,
        })
    })
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_template(template: &str, path: &str) -> Option<RouteParams> {
    let template = segments(template).collect::<Vec<_>>();
    let path = segments(path).collect::<Vec<_>>();
    if template.len() != path.len() {
        return None;
    }

    let mut params = RouteParams::default();
    for (template, segment) in template.iter().zip(&path) {
        match template.strip_prefix(':') {
            Some(name) => params.insert(name, *segment),
            None if template == segment => {}
            None => return None,
        }
    }

    Some(params)
}

fn expand_template(template: &str, params: &RouteParams) -> String {
    let expanded = segments(template)
        .map(|segment| {
            segment
                .strip_prefix(':')
                .and_then(|name| params.get(name))
                .unwrap_or(segment)
        })
        .collect::<Vec<_>>();
    format!("/{}", expanded.join("/"))
}

fn match_node<'t>(
    node: &'t RouteNode,
    path: &str,
) -> Option<(Vec<&'t RouteComponent>, RouteParams)> {
    match node {
        RouteNode::Page {
            path: template,
            component,
            children,
        } => {
            if let Some(params) = match_template(template, path) {
                let mut chain = Vec::new();
                if let Some(component) = component {
                    chain.push(component);
                }
                // An exact match on a branch mounts its index route, if any.
                let index = children.iter().find_map(|child| match child {
                    RouteNode::Index { component } => Some(component),
                    _ => None,
                });
                if let Some(index) = index {
                    chain.push(index);
                }
                return Some((chain, params));
            }

            for child in children {
                if let Some((mut chain, params)) = match_node(child, path) {
                    if let Some(component) = component {
                        chain.insert(0, component);
                    }
                    return Some((chain, params));
                }
            }
            None
        }
        RouteNode::Layout {
            component,
            children,
        } => {
            for child in children {
                if let Some((mut chain, params)) = match_node(child, path) {
                    chain.insert(0, component);
                    return Some((chain, params));
                }
            }
            None
        }
        // Index routes only mount through their parent's exact match.
        RouteNode::Index { .. } => None,
        RouteNode::NotFound { component } => Some((vec![component], RouteParams::default())),
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct RouterProps {
    pub tree: Rc<RouteTree>,
    pub history: AnyHistory,
}

/// Mounts whatever the route table says the current location is.
///
/// The only state is the current path, tracked from the shared history
/// handle; every location change triggers one synchronous re-resolution.
#[function_component(Router)]
pub fn router(props: &RouterProps) -> Html {
    let location = use_state_eq(|| props.history.location().path().to_string());

    use_effect_with_deps(
        {
            let location = location.clone();
            move |history: &AnyHistory| {
                let handle = history.clone();
                let listener = history.listen(move || {
                    location.set(handle.location().path().to_string());
                });
                move || drop(listener)
            }
        },
        props.history.clone(),
    );

    let path = (*location).clone();
    match resolve(&props.tree, &path) {
        Some(Resolution::Matched { chain, params }) => {
            log::debug!("resolved {path} to {chain:?}");
            mount(&chain, &params)
        }
        Some(Resolution::Redirect { to }) => {
            log::info!("redirecting {path} to {to}");
            props.history.replace(to.clone());
            match resolve(&props.tree, &to) {
                Some(Resolution::Matched { chain, params }) => mount(&chain, &params),
                _ => Html::default(),
            }
        }
        None => {
            log::warn!("no route matched {path}");
            Html::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::routing::builder::build_route_tree;
    use crate::routing::plugin::{PluginExport, PluginRegistry, PluginRoute};
    use crate::routing::prefix::RoutePrefix;
    use crate::routing::paths;

    fn tree() -> RouteTree {
        build_route_tree(&RoutePrefix::default(), &PluginRegistry::new())
    }

    fn chain_names(tree: &RouteTree, path: &str) -> Vec<&'static str> {
        match resolve(tree, path) {
            Some(Resolution::Matched { chain, .. }) => {
                chain.into_iter().map(|component| component.name).collect()
            }
            other => panic!("expected a match for {path}, got {other:?}"),
        }
    }

    #[test]
    fn start_page_mounts_on_the_index_route() {
        assert_eq!(chain_names(&tree(), "/"), vec!["App", "StartPage"]);
    }

    #[test]
    fn search_pages_mount_under_the_search_bar_layout() {
        let tree = tree();
        assert_eq!(
            chain_names(&tree, paths::SEARCH),
            vec!["App", "AppWithSearchBar", "SearchPage"]
        );
        assert_eq!(
            chain_names(&tree, &paths::stream_search("5400dead")),
            vec!["App", "AppWithSearchBar", "StreamSearchPage"]
        );
    }

    #[test]
    fn content_pages_mount_under_the_plain_layout() {
        let tree = tree();
        assert_eq!(
            chain_names(&tree, paths::STREAMS),
            vec!["App", "AppWithoutSearchBar", "StreamsPage"]
        );
        assert_eq!(
            chain_names(&tree, paths::system::OVERVIEW),
            vec!["App", "AppWithoutSearchBar", "SystemOverviewPage"]
        );
    }

    #[test]
    fn named_segments_are_captured() {
        let tree = tree();
        let Some(Resolution::Matched { chain, params }) =
            resolve(&tree, &paths::message_show("driftlog_0", "b5e63fc0"))
        else {
            panic!("message route must match");
        };
        assert_eq!(chain.last().map(|c| c.name), Some("ShowMessagePage"));
        assert_eq!(params.get("index"), Some("driftlog_0"));
        assert_eq!(params.get("messageId"), Some("b5e63fc0"));
    }

    #[test]
    fn legacy_stream_search_redirects_with_the_same_identifier() {
        let tree = tree();
        assert_eq!(
            resolve(&tree, &paths::legacy_stream_search("5400dead")),
            Some(Resolution::Redirect {
                to: paths::stream_search("5400dead"),
            })
        );
    }

    #[test]
    fn authentication_overview_mounts_its_index_route() {
        assert_eq!(
            chain_names(&tree(), paths::system::authentication::OVERVIEW),
            vec!["App", "AppWithoutSearchBar", "AuthenticationPage", "UsersPage"]
        );
    }

    #[test]
    fn nested_authentication_routes_keep_their_parent_chain() {
        let tree = tree();
        let path = paths::system::authentication::users::edit("jane");
        let Some(Resolution::Matched { chain, params }) = resolve(&tree, &path) else {
            panic!("user edit route must match");
        };
        assert_eq!(
            chain.iter().map(|c| c.name).collect::<Vec<_>>(),
            vec!["App", "AppWithoutSearchBar", "AuthenticationPage", "EditUsersPage"]
        );
        assert_eq!(params.get("username"), Some("jane"));
    }

    #[test]
    fn provider_routes_resolve_but_mount_nothing_of_their_own() {
        let tree = tree();
        assert_eq!(
            chain_names(&tree, paths::system::authentication::providers::CONFIG),
            vec!["App", "AppWithoutSearchBar", "AuthenticationPage"]
        );
        assert_eq!(
            chain_names(
                &tree,
                &paths::system::authentication::providers::provider("ldap")
            ),
            vec!["App", "AppWithoutSearchBar", "AuthenticationPage"]
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let tree = tree();
        assert_eq!(
            chain_names(&tree, "/no/such/page"),
            vec!["App", "AppWithoutSearchBar", "NotFoundPage"]
        );
        assert_eq!(
            chain_names(&tree, "/streamz"),
            vec!["App", "AppWithoutSearchBar", "NotFoundPage"]
        );
    }

    #[test]
    fn plugin_routes_resolve_under_the_application_prefix() {
        const FOO_PAGE: RouteComponent = RouteComponent::new("FooPage", |_| html!({ "foo" }));

        let mut registry = PluginRegistry::new();
        registry.register(PluginExport::Route(PluginRoute::new("/foo", FOO_PAGE)));
        let tree = build_route_tree(&RoutePrefix::new("/console"), &registry);

        assert_eq!(
            chain_names(&tree, "/console/foo"),
            vec!["App", "AppWithoutSearchBar", "FooPage"]
        );
        // The unprefixed path is not a plugin route; it falls through.
        assert_eq!(
            chain_names(&tree, "/foo"),
            vec!["App", "AppWithoutSearchBar", "NotFoundPage"]
        );
    }
}
