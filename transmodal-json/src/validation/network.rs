#[cfg(test)]
#[path = "../../tests/unit/validation/network_test.rs"]
mod network_test;

use super::*;
use crate::utils::combine_error_results;
use crate::validation::common::get_duplicates;
use std::collections::HashSet;

/// Checks that node ids are unique.
fn check_e1100_no_duplicate_node_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.nodes().map(|node| &node.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1100".to_string(),
            "duplicated node ids".to_string(),
            format!("remove duplicated nodes, ids: '{}'", ids.join(", ")),
        ))
    })
}

/// Checks that all edge endpoints are defined as nodes.
fn check_e1101_unknown_edge_endpoints(ctx: &ValidationContext) -> Result<(), FormatError> {
    let node_ids = ctx.nodes().map(|node| &node.id).collect::<HashSet<_>>();
    let mut unknown = ctx
        .edges()
        .flat_map(|edge| [&edge.from, &edge.to])
        .filter(|id| !node_ids.contains(id))
        .cloned()
        .collect::<Vec<_>>();
    unknown.sort();
    unknown.dedup();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1101".to_string(),
            "edge endpoint is not defined as a node".to_string(),
            format!("define nodes or fix edge endpoints, ids: '{}'", unknown.join(", ")),
        ))
    }
}

/// Checks that edge distances are positive.
fn check_e1102_non_positive_edge_distance(ctx: &ValidationContext) -> Result<(), FormatError> {
    let edges = ctx
        .edges()
        .filter(|edge| edge.distance <= 0.)
        .map(|edge| format!("{} - {}", edge.from, edge.to))
        .collect::<Vec<_>>();

    if edges.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1102".to_string(),
            "edge distance is not positive".to_string(),
            format!("fix distance value for edges: '{}'", edges.join(", ")),
        ))
    }
}

/// Checks that edges use only modes defined in the catalog.
fn check_e1103_unknown_edge_modes(ctx: &ValidationContext) -> Result<(), FormatError> {
    let known = ctx.problem.catalog.modes.keys().collect::<HashSet<_>>();
    let mut unknown =
        ctx.edges().flat_map(|edge| edge.modes.iter()).filter(|mode| !known.contains(mode)).cloned().collect::<Vec<_>>();
    unknown.sort();
    unknown.dedup();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1103".to_string(),
            "edge uses unknown transport mode".to_string(),
            format!("define modes in the catalog or fix edges, modes: '{}'", unknown.join(", ")),
        ))
    }
}

/// Checks that every edge has at least one transport mode.
fn check_e1104_empty_edge_modes(ctx: &ValidationContext) -> Result<(), FormatError> {
    let edges = ctx
        .edges()
        .filter(|edge| edge.modes.is_empty())
        .map(|edge| format!("{} - {}", edge.from, edge.to))
        .collect::<Vec<_>>();

    if edges.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1104".to_string(),
            "edge has no transport modes".to_string(),
            format!("add at least one mode to edges: '{}'", edges.join(", ")),
        ))
    }
}

/// Checks that no edge connects a node to itself.
fn check_e1105_self_loop_edges(ctx: &ValidationContext) -> Result<(), FormatError> {
    let mut edges = ctx.edges().filter(|edge| edge.from == edge.to).map(|edge| edge.from.clone()).collect::<Vec<_>>();
    edges.sort();
    edges.dedup();

    if edges.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1105".to_string(),
            "edge connects a node to itself".to_string(),
            format!("remove self loop edges at: '{}'", edges.join(", ")),
        ))
    }
}

/// Validates the transport network definition.
pub fn validate_network(ctx: &ValidationContext) -> Result<(), MultiFormatError> {
    combine_error_results(&[
        check_e1100_no_duplicate_node_ids(ctx),
        check_e1101_unknown_edge_endpoints(ctx),
        check_e1102_non_positive_edge_distance(ctx),
        check_e1103_unknown_edge_modes(ctx),
        check_e1104_empty_edge_modes(ctx),
        check_e1105_self_loop_edges(ctx),
    ])
    .map_err(|errors| errors.into())
}
