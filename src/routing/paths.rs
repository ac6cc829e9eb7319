//! Canonical path templates for every console page.
//!
//! The route table is built from these, and pages use the same functions to
//! generate links. The parameterized functions take either a concrete value
//! or a `:name` placeholder, so `stream_search(":streamId")` is the matching
//! template and `stream_search("5400...")` is a link to it.

pub const STARTPAGE: &str = "/";
pub const SEARCH: &str = "/search";
pub const SOURCES: &str = "/sources";
pub const STREAMS: &str = "/streams";
pub const ALERTS: &str = "/alerts";
pub const DASHBOARDS: &str = "/dashboards";
pub const GETTING_STARTED: &str = "/gettingstarted";

pub fn message_show(index: &str, message_id: &str) -> String {
    format!("/messages/{index}/{message_id}")
}

pub fn stream_search(stream_id: &str) -> String {
    format!("/streams/{stream_id}/search")
}

// The pre-1.0 message list URL, kept alive as a redirect target source.
pub fn legacy_stream_search(stream_id: &str) -> String {
    format!("/streams/{stream_id}/messages")
}

pub fn stream_edit(stream_id: &str) -> String {
    format!("/streams/{stream_id}/edit")
}

pub fn stream_outputs(stream_id: &str) -> String {
    format!("/streams/{stream_id}/outputs")
}

pub fn stream_alerts(stream_id: &str) -> String {
    format!("/streams/{stream_id}/alerts")
}

pub fn show_alert(alert_id: &str) -> String {
    format!("/alerts/{alert_id}")
}

pub fn dashboard_show(dashboard_id: &str) -> String {
    format!("/dashboards/{dashboard_id}")
}

pub fn node_inputs(node_id: &str) -> String {
    format!("/system/inputs/{node_id}")
}

pub fn global_input_extractors(input_id: &str) -> String {
    format!("/system/inputs/{input_id}/extractors")
}

pub fn local_input_extractors(node_id: &str, input_id: &str) -> String {
    format!("/system/inputs/{node_id}/{input_id}/extractors")
}

pub fn new_extractor(node_id: &str, input_id: &str) -> String {
    format!("/system/inputs/{node_id}/{input_id}/extractors/new")
}

pub fn edit_extractor(node_id: &str, input_id: &str, extractor_id: &str) -> String {
    format!("/system/inputs/{node_id}/{input_id}/extractors/{extractor_id}/edit")
}

pub fn import_extractors(node_id: &str, input_id: &str) -> String {
    format!("/system/inputs/{node_id}/{input_id}/extractors/import")
}

pub fn export_extractors(node_id: &str, input_id: &str) -> String {
    format!("/system/inputs/{node_id}/{input_id}/extractors/export")
}

pub mod system {
    pub const OVERVIEW: &str = "/system";
    pub const CONFIGURATIONS: &str = "/system/configurations";
    pub const GROKPATTERNS: &str = "/system/grokpatterns";
    pub const INPUTS: &str = "/system/inputs";
    pub const LOGGING: &str = "/system/logging";
    pub const OUTPUTS: &str = "/system/outputs";

    pub fn metrics(node_id: &str) -> String {
        format!("/system/metrics/node/{node_id}")
    }

    pub fn threaddump(node_id: &str) -> String {
        format!("/system/threaddump/{node_id}")
    }

    pub mod contentpacks {
        pub const LIST: &str = "/system/contentpacks";
        pub const EXPORT: &str = "/system/contentpacks/export";
    }

    pub mod indices {
        pub const LIST: &str = "/system/indices";
        pub const FAILURES: &str = "/system/indices/failures";
    }

    pub mod nodes {
        pub const LIST: &str = "/system/nodes";

        pub fn show(node_id: &str) -> String {
            format!("/system/nodes/{node_id}")
        }
    }

    pub mod ldap {
        pub const SETTINGS: &str = "/system/ldap";
        pub const GROUPS: &str = "/system/ldap/groups";
    }

    pub mod authentication {
        pub const OVERVIEW: &str = "/system/authentication";
        pub const ROLES: &str = "/system/authentication/roles";

        pub mod users {
            pub const LIST: &str = "/system/authentication/users";
            pub const CREATE: &str = "/system/authentication/users/new";

            pub fn edit(username: &str) -> String {
                format!("/system/authentication/users/edit/{username}")
            }
        }

        pub mod providers {
            pub const CONFIG: &str = "/system/authentication/config";

            pub fn provider(name: &str) -> String {
                format!("/system/authentication/config/{name}")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn templates_and_links_share_a_shape() {
        assert_eq!(stream_search(":streamId"), "/streams/:streamId/search");
        assert_eq!(stream_search("5400dead"), "/streams/5400dead/search");
        assert_eq!(
            edit_extractor("node-1", "input-2", "ex-3"),
            "/system/inputs/node-1/input-2/extractors/ex-3/edit"
        );
        assert_eq!(
            system::authentication::users::edit("jane"),
            "/system/authentication/users/edit/jane"
        );
    }
}
