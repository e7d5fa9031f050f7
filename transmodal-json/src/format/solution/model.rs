use crate::parse_time;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};
use transmodal_core::models::common::{Duration, ServiceTier};

/// A delivery tier of a scheduled package.
#[derive(Clone, Copy, Deserialize, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryTier {
    /// Delivery before the same day cutoff.
    SameDay,
    /// Delivery before the next day cutoff.
    OneDay,
    /// Delivery without any deadline.
    Economy,
}

impl From<ServiceTier> for DeliveryTier {
    fn from(tier: ServiceTier) -> Self {
        match tier {
            ServiceTier::SameDay => DeliveryTier::SameDay,
            ServiceTier::OneDay => DeliveryTier::OneDay,
            ServiceTier::Economy => DeliveryTier::Economy,
        }
    }
}

impl From<DeliveryTier> for ServiceTier {
    fn from(tier: DeliveryTier) -> Self {
        match tier {
            DeliveryTier::SameDay => ServiceTier::SameDay,
            DeliveryTier::OneDay => ServiceTier::OneDay,
            DeliveryTier::Economy => ServiceTier::Economy,
        }
    }
}

/// A scheduled route segment with absolute times in RFC3339 format.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSchedule {
    /// An id of the segment start node.
    pub from: String,
    /// An id of the segment end node.
    pub to: String,
    /// A transport mode name.
    pub mode: String,
    /// A segment start time.
    pub segment_start: String,
    /// A loading start time.
    pub load_start: String,
    /// A departure time.
    pub depart_time: String,
    /// An arrival time.
    pub arrival_time: String,
    /// A segment end time.
    pub segment_end: String,
    /// An id of the vehicle which serves the segment.
    pub vehicle_id: usize,
    /// A distance of the segment.
    pub distance: f64,
    /// A loading duration in minutes.
    pub load_time: f64,
    /// An unloading duration in minutes.
    pub unload_time: f64,
    /// A travel duration in minutes.
    pub travel_time: f64,
    /// A total segment duration in minutes.
    pub total_time: f64,
    /// A travel cost of the segment.
    pub total_cost: f64,
}

impl SegmentSchedule {
    /// Returns the segment duration.
    pub fn duration(&self) -> Duration {
        parse_time(&self.segment_end) - parse_time(&self.segment_start)
    }
}

/// An aggregated statistic of a scheduled package route.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    /// A total route cost.
    pub cost: f64,
    /// A total route distance.
    pub distance: f64,
    /// A total route duration in minutes.
    pub duration: f64,
    /// An amount of transport mode switches along the route.
    pub mode_changes: usize,
    /// An average speed in distance units per hour.
    pub speed: f64,
}

/// A scheduled package with its delivery timeline.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageSchedule {
    /// A package id.
    pub id: usize,
    /// A delivery tier the package was registered with.
    pub delivery_type: DeliveryTier,
    /// An effective start time with all delays applied.
    pub final_start_time: String,
    /// An accumulated delay in minutes.
    pub delay: f64,
    /// Node ids of the package route.
    pub route: Vec<String>,
    /// Scheduled route segments.
    pub segments: Vec<SegmentSchedule>,
    /// An aggregated route statistic.
    pub statistic: Statistic,
}

/// A delivery schedule for all registered packages.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct Schedule {
    /// Scheduled packages ordered by id.
    pub packages: Vec<PackageSchedule>,
}

/// Serializes the schedule in transmodal json format.
pub fn serialize_schedule<W: Write>(writer: BufWriter<W>, schedule: &Schedule) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, schedule).map_err(Error::from)
}

/// Deserializes the schedule from transmodal json format.
pub fn deserialize_schedule<R: Read>(reader: BufReader<R>) -> Result<Schedule, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
