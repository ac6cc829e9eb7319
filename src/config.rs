use anyhow::{anyhow, Context};
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "console-config";

/// Deployment settings the host page embeds as a JSON `<script>` element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Base path the console is served under, e.g. `/console`.
    #[serde(default)]
    pub path_prefix: String,
}

impl AppConfig {
    pub fn from_document() -> anyhow::Result<Self> {
        let element = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .ok_or_else(|| anyhow!("missing #{CONFIG_ELEMENT_ID} element"))?;
        let raw = element.text_content().unwrap_or_default();
        serde_json::from_str(&raw).context("invalid console configuration")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn path_prefix_is_read() {
        let config: AppConfig = serde_json::from_str(r#"{"path_prefix": "/console"}"#).unwrap();
        assert_eq!(config.path_prefix, "/console");
    }
}
