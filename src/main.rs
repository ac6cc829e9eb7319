#![recursion_limit = "1024"]

mod app;
mod config;
mod console;
mod layout;
mod pages;
mod routing;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::routing::PluginRegistry;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Trace;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    let config = AppConfig::from_document().unwrap_or_else(|err| {
        log::warn!("using default configuration: {err:#}");
        AppConfig::default()
    });

    // Extensions register their exports here before the console mounts.
    let plugins = PluginRegistry::new();

    yew::Renderer::<app::Application>::with_props(app::ApplicationProps {
        config,
        plugins: Rc::new(plugins),
    })
    .render();
    Ok(())
}
