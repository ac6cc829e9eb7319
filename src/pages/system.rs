use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const SYSTEM_OVERVIEW_PAGE: RouteComponent =
    RouteComponent::new("SystemOverviewPage", |_| html!(<SystemOverviewPage/>));

pub const NODES_PAGE: RouteComponent = RouteComponent::new("NodesPage", |_| html!(<NodesPage/>));

pub const SHOW_NODE_PAGE: RouteComponent = RouteComponent::new("ShowNodePage", |ctx| {
    html!(<ShowNodePage node_id={ctx.param("nodeId")}/>)
});

pub const THREAD_DUMP_PAGE: RouteComponent = RouteComponent::new("ThreadDumpPage", |ctx| {
    html!(<ThreadDumpPage node_id={ctx.param("nodeId")}/>)
});

pub const SHOW_METRICS_PAGE: RouteComponent = RouteComponent::new("ShowMetricsPage", |ctx| {
    html!(<ShowMetricsPage node_id={ctx.param("nodeId")}/>)
});

pub const INDICES_PAGE: RouteComponent =
    RouteComponent::new("IndicesPage", |_| html!(<IndicesPage/>));

pub const INDEXER_FAILURES_PAGE: RouteComponent =
    RouteComponent::new("IndexerFailuresPage", |_| html!(<IndexerFailuresPage/>));

pub const LOGGERS_PAGE: RouteComponent =
    RouteComponent::new("LoggersPage", |_| html!(<LoggersPage/>));

pub const SYSTEM_OUTPUTS_PAGE: RouteComponent =
    RouteComponent::new("SystemOutputsPage", |_| html!(<SystemOutputsPage/>));

pub const CONFIGURATIONS_PAGE: RouteComponent =
    RouteComponent::new("ConfigurationsPage", |_| html!(<ConfigurationsPage/>));

pub const GROK_PATTERNS_PAGE: RouteComponent =
    RouteComponent::new("GrokPatternsPage", |_| html!(<GrokPatternsPage/>));

pub const CONTENT_PACKS_PAGE: RouteComponent =
    RouteComponent::new("ContentPacksPage", |_| html!(<ContentPacksPage/>));

pub const EXPORT_CONTENT_PACK_PAGE: RouteComponent =
    RouteComponent::new("ExportContentPackPage", |_| html!(<ExportContentPackPage/>));

#[function_component(SystemOverviewPage)]
pub fn system_overview_page() -> Html {
    html!(
        <>
            { title_section("System overview") }
            <PageSection>
                <Content>
                    <p>{"Cluster health, notifications and ingestion throughput at a glance."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(NodesPage)]
pub fn nodes_page() -> Html {
    html!(
        <>
            { title_section("Nodes") }
            <PageSection>
                <Content>
                    <p>{"All nodes of this cluster and their current state."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct NodeProps {
    pub node_id: AttrValue,
}

#[function_component(ShowNodePage)]
pub fn show_node_page(props: &NodeProps) -> Html {
    html!(
        <>
            { title_section("Node") }
            <PageSection>
                <Content>
                    <p>{format!("Details for node {}.", props.node_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ThreadDumpPage)]
pub fn thread_dump_page(props: &NodeProps) -> Html {
    html!(
        <>
            { title_section("Thread dump") }
            <PageSection>
                <Content>
                    <p>{format!("Current thread dump of node {}.", props.node_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ShowMetricsPage)]
pub fn show_metrics_page(props: &NodeProps) -> Html {
    html!(
        <>
            { title_section("Metrics") }
            <PageSection>
                <Content>
                    <p>{format!("Metrics reported by node {}.", props.node_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(IndicesPage)]
pub fn indices_page() -> Html {
    html!(
        <>
            { title_section("Indices") }
            <PageSection>
                <Content>
                    <p>{"Index ranges, sizes and the currently active write index."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(IndexerFailuresPage)]
pub fn indexer_failures_page() -> Html {
    html!(
        <>
            { title_section("Indexer failures") }
            <PageSection>
                <Content>
                    <p>{"Messages the indexer could not store, with the reported reason."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(LoggersPage)]
pub fn loggers_page() -> Html {
    html!(
        <>
            { title_section("Logging") }
            <PageSection>
                <Content>
                    <p>{"Log levels of the subsystems on every node, adjustable at runtime."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(SystemOutputsPage)]
pub fn system_outputs_page() -> Html {
    html!(
        <>
            { title_section("Outputs") }
            <PageSection>
                <Content>
                    <p>{"Outputs defined on this cluster and the streams using them."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ConfigurationsPage)]
pub fn configurations_page() -> Html {
    html!(
        <>
            { title_section("Configurations") }
            <PageSection>
                <Content>
                    <p>{"Cluster-wide settings for searches, message processors and plugins."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(GrokPatternsPage)]
pub fn grok_patterns_page() -> Html {
    html!(
        <>
            { title_section("Grok patterns") }
            <PageSection>
                <Content>
                    <p>{"Grok patterns available to extractors and pipeline rules."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ContentPacksPage)]
pub fn content_packs_page() -> Html {
    html!(
        <>
            { title_section("Content packs") }
            <PageSection>
                <Content>
                    <p>{"Bundles of inputs, streams and dashboards you can install in one go."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ExportContentPackPage)]
pub fn export_content_pack_page() -> Html {
    html!(
        <>
            { title_section("Create a content pack") }
            <PageSection>
                <Content>
                    <p>{"Select the pieces of this setup to bundle into a content pack."}</p>
                </Content>
            </PageSection>
        </>
    )
}
