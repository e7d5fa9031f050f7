#[cfg(test)]
#[path = "../../tests/unit/validation/catalog_test.rs"]
mod catalog_test;

use super::*;
use crate::utils::combine_error_results;
use transmodal_core::models::network::MAX_TRANSPORT_MODES;

/// Checks that the catalog defines at least one transport mode.
fn check_e1200_empty_catalog(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.catalog.modes.is_empty() {
        Err(FormatError::new(
            "E1200".to_string(),
            "catalog has no transport modes".to_string(),
            "add at least one mode to the catalog".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that mode parameters are within their valid ranges.
fn check_e1201_invalid_mode_parameters(ctx: &ValidationContext) -> Result<(), FormatError> {
    let modes = ctx
        .problem
        .catalog
        .modes
        .iter()
        .filter(|(_, mode)| mode.time_per_100 <= 0. || mode.cost_per_100 < 0. || mode.load_unload_time < 0.)
        .map(|(name, _)| name.clone())
        .collect::<Vec<_>>();

    if modes.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1201".to_string(),
            "transport mode has invalid parameters".to_string(),
            format!("fix parameters of modes: '{}'", modes.join(", ")),
        ))
    }
}

/// Checks that the amount of modes fits the network link mode set limit.
fn check_e1202_too_many_modes(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.catalog.modes.len() > MAX_TRANSPORT_MODES {
        Err(FormatError::new(
            "E1202".to_string(),
            "too many transport modes".to_string(),
            format!("keep at most {MAX_TRANSPORT_MODES} modes in the catalog"),
        ))
    } else {
        Ok(())
    }
}

/// Validates the transport mode catalog.
pub fn validate_catalog(ctx: &ValidationContext) -> Result<(), MultiFormatError> {
    combine_error_results(&[
        check_e1200_empty_catalog(ctx),
        check_e1201_invalid_mode_parameters(ctx),
        check_e1202_too_many_modes(ctx),
    ])
    .map_err(|errors| errors.into())
}
