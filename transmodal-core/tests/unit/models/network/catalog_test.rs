use super::*;
use crate::helpers::create_reference_catalog;

fn create_profile(time_per_100: f64, cost_per_100: f64, load_unload_time: f64) -> ModeProfile {
    ModeProfile { time_per_100, cost_per_100, load_unload_time }
}

#[test]
fn can_index_modes_in_insertion_order() {
    let catalog = create_reference_catalog();

    assert_eq!(catalog.len(), 4);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.mode_index("road"), Some(0));
    assert_eq!(catalog.mode_index("railway"), Some(1));
    assert_eq!(catalog.mode_index("maritime"), Some(3));
    assert_eq!(catalog.mode_name(1), "railway");
    assert_eq!(catalog.profile(2).time_per_100, 10.);
    assert_eq!(catalog.mode_index("pipeline"), None);
}

#[test]
fn can_reject_empty_catalog() {
    let result = TransportCatalogBuilder::default().build();

    assert!(result.err().is_some_and(|err| err.to_string().contains("at least one")));
}

#[test]
fn can_reject_duplicate_mode_name() {
    let result = TransportCatalogBuilder::default()
        .with_mode("road", create_profile(60., 1., 5.))
        .with_mode("road", create_profile(30., 2., 5.))
        .build();

    assert!(result.err().is_some_and(|err| err.to_string().contains("duplicate")));
}

#[test]
fn can_reject_catalog_above_mode_limit() {
    let result = (0..=MAX_TRANSPORT_MODES)
        .fold(TransportCatalogBuilder::default(), |builder, idx| {
            builder.with_mode(&format!("mode_{idx}"), create_profile(60., 1., 5.))
        })
        .build();

    assert!(result.is_err());
}

parameterized_test! {can_reject_invalid_mode_profile, (time_per_100, cost_per_100, load_unload_time), {
    let result = TransportCatalogBuilder::default()
        .with_mode("road", create_profile(time_per_100, cost_per_100, load_unload_time))
        .build();

    assert!(result.is_err());
}}

can_reject_invalid_mode_profile! {
    case01_zero_time: (0., 1., 5.),
    case02_negative_time: (-60., 1., 5.),
    case03_negative_cost: (60., -1., 5.),
    case04_negative_handling: (60., 1., -5.),
}
