#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

extern crate serde_json;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A node classification within the transport network.
#[derive(Clone, Copy, Deserialize, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// A dispatch origin.
    Warehouse,
    /// A transfer platform which cannot be a delivery point.
    Intermediate,
    /// A delivery destination.
    City,
}

/// A transport network node.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// A unique node id.
    pub id: String,
    /// A node type.
    #[serde(rename(deserialize = "type", serialize = "type"))]
    pub node_type: NodeType,
    /// An optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// An optional display color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An undirected connection between two network nodes.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// An id of the first endpoint.
    pub from: String,
    /// An id of the second endpoint.
    pub to: String,
    /// A distance between the endpoints.
    pub distance: f64,
    /// Names of transport modes allowed on the connection.
    pub modes: Vec<String>,
}

/// A transport network definition.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct Network {
    /// Network nodes.
    pub nodes: Vec<Node>,
    /// Network edges.
    pub edges: Vec<Edge>,
}

/// Transport parameters of a single mode applied per 100 distance units.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    /// Travel time in minutes per 100 distance units.
    pub time_per_100: f64,
    /// Travel cost per 100 distance units.
    pub cost_per_100: f64,
    /// Time in minutes spent to load or unload a shipment.
    pub load_unload_time: f64,
}

/// A transport mode catalog. Modes are interned in alphabetical name order.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct Catalog {
    /// Transport modes by name.
    pub modes: BTreeMap<String, Mode>,
}

/// A transport problem definition in transmodal format.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct Problem {
    /// A transport network.
    pub network: Network,
    /// A transport mode catalog.
    pub catalog: Catalog,
}

/// Deserializes problem in transmodal json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        vec![FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )]
        .into()
    })
}

/// Serializes `problem` in transmodal json format into `writer`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
