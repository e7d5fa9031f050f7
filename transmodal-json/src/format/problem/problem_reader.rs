use super::*;
use crate::validation::ValidationContext;
use transmodal_core::models::common::Dimensions;
use transmodal_core::models::network::{
    ModeProfile, NetworkSnapshot, NetworkSnapshotBuilder, NodeKind, TransportCatalog, TransportCatalogBuilder,
};
use transmodal_core::utils::{GenericError, GenericResult};

/// Maps the api problem onto the core problem model running the validation first.
pub(super) fn map_to_problem(api_problem: ApiProblem) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(&api_problem).validate()?;

    let catalog = create_catalog(&api_problem).map_err(to_multi_format_error)?;
    let network = create_network(&api_problem, &catalog).map_err(to_multi_format_error)?;

    Ok(CoreProblem { network, catalog })
}

fn create_catalog(api_problem: &ApiProblem) -> GenericResult<TransportCatalog> {
    api_problem
        .catalog
        .modes
        .iter()
        .fold(TransportCatalogBuilder::default(), |builder, (name, mode)| {
            builder.with_mode(
                name,
                ModeProfile {
                    time_per_100: mode.time_per_100,
                    cost_per_100: mode.cost_per_100,
                    load_unload_time: mode.load_unload_time,
                },
            )
        })
        .build()
}

fn create_network(api_problem: &ApiProblem, catalog: &TransportCatalog) -> GenericResult<NetworkSnapshot> {
    let builder = api_problem.network.nodes.iter().fold(NetworkSnapshotBuilder::new(catalog), |builder, node| {
        let mut dimens = Dimensions::default();
        if let Some(name) = node.name.clone() {
            dimens.set_node_name(name);
        }
        if let Some(color) = node.color.clone() {
            dimens.set_node_color(color);
        }

        builder.with_node_dimens(&node.id, node.node_type.into(), dimens)
    });

    api_problem
        .network
        .edges
        .iter()
        .fold(builder, |builder, edge| builder.with_edge(&edge.from, &edge.to, edge.distance, edge.modes.iter()))
        .build()
}

impl From<NodeType> for NodeKind {
    fn from(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Warehouse => NodeKind::Warehouse,
            NodeType::Intermediate => NodeKind::Intermediate,
            NodeType::City => NodeKind::City,
        }
    }
}

fn to_multi_format_error(error: GenericError) -> MultiFormatError {
    vec![FormatError::new(
        "E0002".to_string(),
        "cannot build problem model".to_string(),
        format!("check problem definition: '{error}'"),
    )]
    .into()
}
