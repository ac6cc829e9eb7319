use crate::layout;
use crate::pages;

use super::node::{Redirect, RouteNode, RouteTree};
use super::paths;
use super::plugin::PluginRegistry;
use super::prefix::RoutePrefix;

/// Composes the full route table from the built-in page list and the
/// current plugin registry snapshot.
///
/// The output is a pure function of its inputs: rebuilding from the same
/// snapshot yields a structurally identical tree. Built-in routes keep
/// their declaration order; plugin routes come after all built-ins, in
/// registration order, each rooted under the application prefix; the
/// not-found wildcard stays last so it only matches when nothing else does.
pub fn build_route_tree(prefix: &RoutePrefix, plugins: &PluginRegistry) -> RouteTree {
    let with_search_bar = RouteNode::layout(
        layout::APP_WITH_SEARCH_BAR,
        vec![
            RouteNode::page(paths::SEARCH, pages::SEARCH_PAGE),
            RouteNode::page(
                paths::message_show(":index", ":messageId"),
                pages::SHOW_MESSAGE_PAGE,
            ),
            RouteNode::page(paths::SOURCES, pages::SOURCES_PAGE),
            RouteNode::page(
                paths::stream_search(":streamId"),
                pages::STREAM_SEARCH_PAGE,
            ),
        ],
    );

    let authentication = RouteNode::nested(
        paths::system::authentication::OVERVIEW,
        pages::AUTHENTICATION_PAGE,
        vec![
            RouteNode::index(pages::USERS_PAGE),
            RouteNode::page(paths::system::authentication::users::LIST, pages::USERS_PAGE),
            RouteNode::page(
                paths::system::authentication::users::CREATE,
                pages::CREATE_USERS_PAGE,
            ),
            RouteNode::page(
                paths::system::authentication::users::edit(":username"),
                pages::EDIT_USERS_PAGE,
            ),
            RouteNode::page(paths::system::authentication::ROLES, pages::ROLES_PAGE),
            // Provider configuration routes resolve but stay unmounted
            // until the provider UI lands.
            RouteNode::unmounted(paths::system::authentication::providers::CONFIG),
            RouteNode::unmounted(paths::system::authentication::providers::provider(":name")),
        ],
    );

    let mut content = vec![
        RouteNode::page(paths::GETTING_STARTED, pages::GETTING_STARTED_PAGE),
        RouteNode::page(paths::STREAMS, pages::STREAMS_PAGE),
        RouteNode::page(paths::stream_edit(":streamId"), pages::STREAM_EDIT_PAGE),
        RouteNode::page(
            paths::stream_outputs(":streamId"),
            pages::STREAM_OUTPUTS_PAGE,
        ),
        RouteNode::page(paths::stream_alerts(":streamId"), pages::STREAM_ALERTS_PAGE),
        RouteNode::page(paths::ALERTS, pages::ALERTS_PAGE),
        RouteNode::page(paths::show_alert(":alertId"), pages::SHOW_ALERT_PAGE),
        RouteNode::page(paths::DASHBOARDS, pages::DASHBOARDS_PAGE),
        RouteNode::page(
            paths::dashboard_show(":dashboardId"),
            pages::SHOW_DASHBOARD_PAGE,
        ),
        RouteNode::page(paths::system::INPUTS, pages::INPUTS_PAGE),
        RouteNode::page(paths::node_inputs(":nodeId"), pages::NODE_INPUTS_PAGE),
        RouteNode::page(
            paths::global_input_extractors(":inputId"),
            pages::EXTRACTORS_PAGE,
        ),
        RouteNode::page(
            paths::local_input_extractors(":nodeId", ":inputId"),
            pages::EXTRACTORS_PAGE,
        ),
        RouteNode::page(
            paths::new_extractor(":nodeId", ":inputId"),
            pages::CREATE_EXTRACTORS_PAGE,
        ),
        RouteNode::page(
            paths::edit_extractor(":nodeId", ":inputId", ":extractorId"),
            pages::EDIT_EXTRACTORS_PAGE,
        ),
        RouteNode::page(
            paths::import_extractors(":nodeId", ":inputId"),
            pages::IMPORT_EXTRACTORS_PAGE,
        ),
        RouteNode::page(
            paths::export_extractors(":nodeId", ":inputId"),
            pages::EXPORT_EXTRACTORS_PAGE,
        ),
        RouteNode::page(paths::system::CONFIGURATIONS, pages::CONFIGURATIONS_PAGE),
        RouteNode::page(paths::system::contentpacks::LIST, pages::CONTENT_PACKS_PAGE),
        RouteNode::page(
            paths::system::contentpacks::EXPORT,
            pages::EXPORT_CONTENT_PACK_PAGE,
        ),
        RouteNode::page(paths::system::GROKPATTERNS, pages::GROK_PATTERNS_PAGE),
        RouteNode::page(paths::system::indices::LIST, pages::INDICES_PAGE),
        RouteNode::page(
            paths::system::indices::FAILURES,
            pages::INDEXER_FAILURES_PAGE,
        ),
        RouteNode::page(paths::system::LOGGING, pages::LOGGERS_PAGE),
        RouteNode::page(paths::system::metrics(":nodeId"), pages::SHOW_METRICS_PAGE),
        RouteNode::page(paths::system::nodes::LIST, pages::NODES_PAGE),
        RouteNode::page(paths::system::nodes::show(":nodeId"), pages::SHOW_NODE_PAGE),
        RouteNode::page(paths::system::OUTPUTS, pages::SYSTEM_OUTPUTS_PAGE),
        authentication,
        RouteNode::page(paths::system::OVERVIEW, pages::SYSTEM_OVERVIEW_PAGE),
        RouteNode::page(
            paths::system::threaddump(":nodeId"),
            pages::THREAD_DUMP_PAGE,
        ),
        RouteNode::page(paths::system::ldap::SETTINGS, pages::LDAP_PAGE),
        RouteNode::page(paths::system::ldap::GROUPS, pages::LDAP_GROUPS_PAGE),
    ];

    content.extend(
        plugins
            .routes()
            .map(|route| RouteNode::page(prefix.apply(&route.path), route.component)),
    );
    content.push(RouteNode::not_found(pages::NOT_FOUND_PAGE));

    let without_search_bar = RouteNode::layout(layout::APP_WITHOUT_SEARCH_BAR, content);

    RouteTree {
        root: RouteNode::nested(
            paths::STARTPAGE,
            layout::APP,
            vec![
                RouteNode::index(pages::START_PAGE),
                with_search_bar,
                without_search_bar,
            ],
        ),
        redirects: vec![Redirect::new(
            paths::legacy_stream_search(":streamId"),
            paths::stream_search(":streamId"),
        )],
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::routing::node::RouteNode;
    use crate::routing::plugin::{PluginExport, PluginRoute};
    use crate::routing::RouteComponent;
    use yew::prelude::*;

    const FOO_PAGE: RouteComponent = RouteComponent::new("FooPage", |_| html!({ "foo" }));
    const BAR_PAGE: RouteComponent = RouteComponent::new("BarPage", |_| html!({ "bar" }));

    fn registry() -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        registry.register(PluginExport::Route(PluginRoute::new("/foo", FOO_PAGE)));
        registry.register(PluginExport::Route(PluginRoute::new("/bar", BAR_PAGE)));
        registry
    }

    fn content_children(tree: &RouteTree) -> &[RouteNode] {
        let RouteNode::Page { children, .. } = &tree.root else {
            panic!("root must be a page node");
        };
        let Some(RouteNode::Layout { children, .. }) = children.last() else {
            panic!("last root child must be the content layout");
        };
        children
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let prefix = RoutePrefix::default();
        let registry = registry();
        assert_eq!(
            build_route_tree(&prefix, &registry),
            build_route_tree(&prefix, &registry)
        );
    }

    #[test]
    fn plugin_routes_are_appended_in_registration_order() {
        let tree = build_route_tree(&RoutePrefix::new("/console"), &registry());
        let children = content_children(&tree);

        let tail = children
            .iter()
            .rev()
            .take(3)
            .rev()
            .map(|node| match node {
                RouteNode::Page { path, component, .. } => {
                    (path.as_str(), component.as_ref().map(|c| c.name))
                }
                RouteNode::NotFound { component } => ("*", Some(component.name)),
                _ => panic!("unexpected node at the tail of the content layout"),
            })
            .collect::<Vec<_>>();

        assert_eq!(
            tail,
            vec![
                ("/console/foo", Some("FooPage")),
                ("/console/bar", Some("BarPage")),
                ("*", Some("NotFoundPage")),
            ]
        );
    }

    #[test]
    fn wildcard_stays_last_without_plugins() {
        let tree = build_route_tree(&RoutePrefix::default(), &PluginRegistry::new());
        let children = content_children(&tree);
        assert!(matches!(children.last(), Some(RouteNode::NotFound { .. })));
    }

    #[test]
    fn one_leaf_per_plugin_entry() {
        let tree = build_route_tree(&RoutePrefix::default(), &registry());
        let children = content_children(&tree);
        let plugin_leaves = children
            .iter()
            .filter(|node| {
                matches!(node, RouteNode::Page { path, .. } if path == "/foo" || path == "/bar")
            })
            .count();
        assert_eq!(plugin_leaves, 2);
    }
}
