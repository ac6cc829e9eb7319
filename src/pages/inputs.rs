use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const INPUTS_PAGE: RouteComponent = RouteComponent::new("InputsPage", |_| html!(<InputsPage/>));

pub const NODE_INPUTS_PAGE: RouteComponent = RouteComponent::new("NodeInputsPage", |ctx| {
    html!(<NodeInputsPage node_id={ctx.param("nodeId")}/>)
});

// Serves both the global route (input only) and the node-local one; the
// node id is empty for globally addressed inputs.
pub const EXTRACTORS_PAGE: RouteComponent = RouteComponent::new("ExtractorsPage", |ctx| {
    html!(<ExtractorsPage node_id={ctx.param("nodeId")} input_id={ctx.param("inputId")}/>)
});

pub const CREATE_EXTRACTORS_PAGE: RouteComponent =
    RouteComponent::new("CreateExtractorsPage", |ctx| {
        html!(<CreateExtractorsPage node_id={ctx.param("nodeId")} input_id={ctx.param("inputId")}/>)
    });

pub const EDIT_EXTRACTORS_PAGE: RouteComponent =
    RouteComponent::new("EditExtractorsPage", |ctx| {
        html!(
            <EditExtractorsPage
                node_id={ctx.param("nodeId")}
                input_id={ctx.param("inputId")}
                extractor_id={ctx.param("extractorId")}
            />
        )
    });

pub const IMPORT_EXTRACTORS_PAGE: RouteComponent =
    RouteComponent::new("ImportExtractorsPage", |ctx| {
        html!(<ImportExtractorsPage node_id={ctx.param("nodeId")} input_id={ctx.param("inputId")}/>)
    });

pub const EXPORT_EXTRACTORS_PAGE: RouteComponent =
    RouteComponent::new("ExportExtractorsPage", |ctx| {
        html!(<ExportExtractorsPage node_id={ctx.param("nodeId")} input_id={ctx.param("inputId")}/>)
    });

#[function_component(InputsPage)]
pub fn inputs_page() -> Html {
    html!(
        <>
            { title_section("Inputs") }
            <PageSection>
                <Content>
                    <p>{"Inputs accept log messages over the protocols your infrastructure speaks."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct NodeInputsProps {
    pub node_id: AttrValue,
}

#[function_component(NodeInputsPage)]
pub fn node_inputs_page(props: &NodeInputsProps) -> Html {
    html!(
        <>
            { title_section("Node inputs") }
            <PageSection>
                <Content>
                    <p>{format!("Inputs running on node {}.", props.node_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct ExtractorsProps {
    #[prop_or_default]
    pub node_id: AttrValue,
    pub input_id: AttrValue,
}

#[function_component(ExtractorsPage)]
pub fn extractors_page(props: &ExtractorsProps) -> Html {
    html!(
        <>
            { title_section("Extractors") }
            <PageSection>
                <Content>
                    <p>{format!("Extractors of input {}.", props.input_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(CreateExtractorsPage)]
pub fn create_extractors_page(props: &ExtractorsProps) -> Html {
    html!(
        <>
            { title_section("New extractor") }
            <PageSection>
                <Content>
                    <p>{format!("Create an extractor for input {} on node {}.", props.input_id, props.node_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct EditExtractorProps {
    pub node_id: AttrValue,
    pub input_id: AttrValue,
    pub extractor_id: AttrValue,
}

#[function_component(EditExtractorsPage)]
pub fn edit_extractors_page(props: &EditExtractorProps) -> Html {
    html!(
        <>
            { title_section("Edit extractor") }
            <PageSection>
                <Content>
                    <p>{format!("Editing extractor {} of input {}.", props.extractor_id, props.input_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ImportExtractorsPage)]
pub fn import_extractors_page(props: &ExtractorsProps) -> Html {
    html!(
        <>
            { title_section("Import extractors") }
            <PageSection>
                <Content>
                    <p>{format!("Paste an extractor export to add it to input {}.", props.input_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(ExportExtractorsPage)]
pub fn export_extractors_page(props: &ExtractorsProps) -> Html {
    html!(
        <>
            { title_section("Export extractors") }
            <PageSection>
                <Content>
                    <p>{format!("Shareable JSON export of the extractors of input {}.", props.input_id)}</p>
                </Content>
            </PageSection>
        </>
    )
}
