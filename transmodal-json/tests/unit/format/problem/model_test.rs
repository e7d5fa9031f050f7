use super::*;
use crate::helpers::SIMPLE_PROBLEM;

#[test]
fn can_deserialize_problem() {
    let problem = deserialize_problem(BufReader::new(SIMPLE_PROBLEM.as_bytes())).ok().unwrap();

    assert_eq!(problem.network.nodes.len(), 3);
    assert_eq!(problem.network.edges.len(), 2);
    assert_eq!(problem.catalog.modes.len(), 2);

    let warehouse = problem.network.nodes.first().unwrap();
    assert_eq!(warehouse.id, "Madrid");
    assert_eq!(warehouse.node_type, NodeType::Warehouse);
    assert_eq!(warehouse.name.as_deref(), Some("Madrid DC"));
    assert_eq!(warehouse.color.as_deref(), Some("#ff6d00"));

    let platform = &problem.network.nodes[1];
    assert_eq!(platform.node_type, NodeType::Intermediate);
    assert!(platform.name.is_none() && platform.color.is_none());

    let edge = problem.network.edges.first().unwrap();
    assert_eq!((edge.from.as_str(), edge.to.as_str()), ("Madrid", "Valencia"));
    assert_eq!(edge.distance, 360.);
    assert_eq!(edge.modes, vec!["road".to_string(), "railway".to_string()]);

    let railway = problem.catalog.modes.get("railway").unwrap();
    assert_eq!((railway.time_per_100, railway.cost_per_100, railway.load_unload_time), (50., 0.8, 10.));
}

#[test]
fn can_return_error_on_malformed_problem() {
    let result = deserialize_problem(BufReader::new(r#"{"network": {}}"#.as_bytes()));

    let errors = result.err().unwrap().errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E0000");
    assert!(errors[0].action.contains("check input json"));
}

#[test]
fn can_serialize_problem_with_camel_case_names() {
    let problem = deserialize_problem(BufReader::new(SIMPLE_PROBLEM.as_bytes())).ok().unwrap();

    let mut buffer = Vec::new();
    serialize_problem(&problem, &mut BufWriter::new(&mut buffer)).unwrap();
    let json = String::from_utf8(buffer).unwrap();

    assert!(json.contains(r#""type": "warehouse""#));
    assert!(json.contains(r#""timePer100""#));
    assert!(json.contains(r#""loadUnloadTime""#));
    assert!(!json.contains("node_type"));

    let restored = deserialize_problem(BufReader::new(json.as_bytes())).ok().unwrap();
    assert_eq!(restored, problem);
}
