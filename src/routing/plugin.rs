use super::node::RouteComponent;

/// A route contributed by an extension, in its leaf form. The component
/// name is the registration key shown in logs and menus.
#[derive(Clone, Debug, PartialEq)]
pub struct PluginRoute {
    pub path: String,
    pub component: RouteComponent,
}

impl PluginRoute {
    pub fn new(path: impl Into<String>, component: RouteComponent) -> Self {
        Self {
            path: path.into(),
            component,
        }
    }
}

/// A tagged registry entry. Only route exports matter to the route table;
/// other export kinds live in their own subsystems.
#[derive(Clone, Debug, PartialEq)]
pub enum PluginExport {
    Route(PluginRoute),
}

/// Everything extensions registered before the console was mounted.
///
/// The registry is handed to the route table builder as an explicit
/// argument and only ever read there. Entries are kept in registration
/// order, which is also their matching order. Descriptors are not
/// validated: a duplicate path simply ends up unreachable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PluginRegistry {
    exports: Vec<PluginExport>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, export: PluginExport) {
        self.exports.push(export);
    }

    /// All entries tagged as routes, in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &PluginRoute> {
        self.exports.iter().map(|export| match export {
            PluginExport::Route(route) => route,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use yew::prelude::*;

    const REPORTS_PAGE: RouteComponent = RouteComponent::new("ReportsPage", |_| html!());
    const AUDIT_PAGE: RouteComponent = RouteComponent::new("AuditPage", |_| html!());

    #[test]
    fn routes_preserve_registration_order() {
        let mut registry = PluginRegistry::new();
        registry.register(PluginExport::Route(PluginRoute::new("/reports", REPORTS_PAGE)));
        registry.register(PluginExport::Route(PluginRoute::new("/audit", AUDIT_PAGE)));

        let paths = registry
            .routes()
            .map(|route| route.path.as_str())
            .collect::<Vec<_>>();
        assert_eq!(paths, vec!["/reports", "/audit"]);
    }
}
