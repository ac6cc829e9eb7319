use std::fmt;

use yew::prelude::*;

/// A displayable reference to a page- or layout-rendering unit.
///
/// The name doubles as the registration key for plugin-contributed routes
/// and is what shows up in logs, so it should read like a component name.
#[derive(Clone, Copy)]
pub struct RouteComponent {
    pub name: &'static str,
    pub render: fn(&RouteContext) -> Html,
}

impl RouteComponent {
    pub const fn new(name: &'static str, render: fn(&RouteContext) -> Html) -> Self {
        Self { name, render }
    }

    pub fn mount(&self, ctx: &RouteContext) -> Html {
        (self.render)(ctx)
    }
}

impl PartialEq for RouteComponent {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RouteComponent {}

impl fmt::Debug for RouteComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Named path segments captured while matching, in template order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a mounted component receives: its captured parameters and the
/// already-rendered subtree of the matched child, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteContext {
    pub params: RouteParams,
    pub children: Html,
}

impl RouteContext {
    /// Captured segment by name, empty when absent. Convenient for props.
    pub fn param(&self, name: &str) -> AttrValue {
        AttrValue::from(self.params.get(name).unwrap_or_default().to_string())
    }
}

/// One node of the route tree.
///
/// A `Page` without children is a plain leaf; with children it owns a
/// nested sub-tree and its component wraps whichever child matched. A
/// componentless `Page` is an intentionally unmounted route: it resolves,
/// but contributes nothing to the component chain.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteNode {
    Index {
        component: RouteComponent,
    },
    Page {
        path: String,
        component: Option<RouteComponent>,
        children: Vec<RouteNode>,
    },
    Layout {
        component: RouteComponent,
        children: Vec<RouteNode>,
    },
    NotFound {
        component: RouteComponent,
    },
}

impl RouteNode {
    pub fn page(path: impl Into<String>, component: RouteComponent) -> Self {
        Self::Page {
            path: path.into(),
            component: Some(component),
            children: Vec::new(),
        }
    }

    pub fn unmounted(path: impl Into<String>) -> Self {
        Self::Page {
            path: path.into(),
            component: None,
            children: Vec::new(),
        }
    }

    pub fn nested(
        path: impl Into<String>,
        component: RouteComponent,
        children: Vec<RouteNode>,
    ) -> Self {
        Self::Page {
            path: path.into(),
            component: Some(component),
            children,
        }
    }

    pub fn index(component: RouteComponent) -> Self {
        Self::Index { component }
    }

    pub fn layout(component: RouteComponent, children: Vec<RouteNode>) -> Self {
        Self::Layout {
            component,
            children,
        }
    }

    pub fn not_found(component: RouteComponent) -> Self {
        Self::NotFound { component }
    }
}

/// Rewrites one path template to another before any matching happens.
/// Parameter names appearing in `from` may be referenced in `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

impl Redirect {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The fully composed route table. Built once at application start and
/// read-only afterwards; navigation never mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTree {
    pub root: RouteNode,
    pub redirects: Vec<Redirect>,
}
