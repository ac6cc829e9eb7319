//! The route table and the navigation engine behind the console.
//!
//! Built-in pages, plugin-contributed routes, one legacy redirect and the
//! not-found wildcard are composed into a single read-only [`RouteTree`]
//! at startup; the [`Router`] resolves every location change against it.

mod builder;
mod engine;
mod node;
pub mod paths;
mod plugin;
mod prefix;

pub use builder::build_route_tree;
pub use engine::{mount, resolve, Resolution, Router, RouterProps};
pub use node::{Redirect, RouteComponent, RouteContext, RouteNode, RouteParams, RouteTree};
pub use plugin::{PluginExport, PluginRegistry, PluginRoute};
pub use prefix::RoutePrefix;
