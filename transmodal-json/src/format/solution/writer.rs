#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use crate::format::solution::{PackageSchedule, Schedule, SegmentSchedule, Statistic, serialize_schedule};
use crate::format_time;
use std::io::{BufWriter, Write};
use transmodal_core::models::Problem;
use transmodal_core::scheduling::{LegSchedule, PackageId, PackageMap, PackageTimetable};
use transmodal_core::utils::GenericError;

/// A trait to write the delivery schedule in transmodal json format.
pub trait TransmodalSchedule<W: Write> {
    /// Serializes the schedule in transmodal json format.
    fn write_transmodal(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> TransmodalSchedule<W> for PackageMap<PackageTimetable> {
    fn write_transmodal(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), GenericError> {
        let schedule = create_schedule_model(problem, self);
        serialize_schedule(writer, &schedule).map_err(|err| format!("cannot serialize schedule: '{err}'"))?;

        Ok(())
    }
}

/// Creates the schedule model with node ids, mode names and RFC3339 timestamps resolved.
pub fn create_schedule_model(problem: &Problem, timetables: &PackageMap<PackageTimetable>) -> Schedule {
    let mut packages =
        timetables.iter().map(|(id, timetable)| create_package_schedule(problem, *id, timetable)).collect::<Vec<_>>();
    packages.sort_by_key(|package| package.id);

    Schedule { packages }
}

fn create_package_schedule(problem: &Problem, id: PackageId, timetable: &PackageTimetable) -> PackageSchedule {
    PackageSchedule {
        id,
        delivery_type: timetable.delivery_type.into(),
        final_start_time: format_time(timetable.final_start_time),
        delay: timetable.delay,
        route: timetable.route.iter().map(|&location| problem.network.node_id(location).to_string()).collect(),
        segments: timetable.legs.iter().map(|leg| create_segment_schedule(problem, leg)).collect(),
        statistic: create_statistic(timetable),
    }
}

fn create_segment_schedule(problem: &Problem, leg: &LegSchedule) -> SegmentSchedule {
    SegmentSchedule {
        from: problem.network.node_id(leg.from).to_string(),
        to: problem.network.node_id(leg.to).to_string(),
        mode: problem.catalog.mode_name(leg.mode).to_string(),
        segment_start: format_time(leg.segment_start),
        load_start: format_time(leg.load_start),
        depart_time: format_time(leg.depart_time),
        arrival_time: format_time(leg.arrival_time),
        segment_end: format_time(leg.segment_end),
        vehicle_id: leg.vehicle,
        distance: leg.distance,
        load_time: leg.load_time,
        unload_time: leg.unload_time,
        travel_time: leg.travel_time,
        total_time: leg.total_time,
        total_cost: leg.total_cost,
    }
}

fn create_statistic(timetable: &PackageTimetable) -> Statistic {
    let cost = timetable.legs.iter().map(|leg| leg.total_cost).sum();
    let distance = timetable.legs.iter().map(|leg| leg.distance).sum::<f64>();
    let duration = timetable.legs.iter().map(|leg| leg.total_time).sum::<f64>();
    let mode_changes = timetable.legs.windows(2).filter(|pair| pair[0].mode != pair[1].mode).count();
    let speed = if duration > 0. { distance / (duration / 60.) } else { 0. };

    Statistic { cost, distance, duration, mode_changes, speed }
}
