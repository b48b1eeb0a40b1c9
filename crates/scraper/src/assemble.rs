//! Turns a [`ScanReport`] into the response handed to API consumers.

use schedule_core::models::{
    catalog,
    schedule::{DayBlock, ScheduleEntry, ScheduleResponse, Weekday},
};
use std::collections::BTreeMap;

use crate::{
    config::ScannerConfig,
    scanner::{ScanReport, ScannedCell},
};

/// Builds the lecture for one subject cell.
///
/// Fragments are read as name, teacher, then room; whatever follows the
/// teacher is joined into the room. The group comes from the cell's column.
pub fn entry_from_cell(cell: &ScannedCell, config: &ScannerConfig) -> ScheduleEntry {
    let mut fragments = cell.fragments.iter();
    let name = fragments.next().cloned().unwrap_or_default();
    let teacher = fragments.next().cloned().unwrap_or_default();
    let room = fragments.map(String::as_str).collect::<Vec<_>>().join(" ");

    let group = cell
        .column
        .checked_sub(config.first_subject_column)
        .and_then(catalog::group_at)
        .unwrap_or_default()
        .to_string();

    ScheduleEntry {
        name,
        time: cell.time.clone(),
        teacher,
        room,
        group,
    }
}

fn empty_block(day: Weekday) -> DayBlock {
    DayBlock {
        day,
        date: String::new(),
        lectures: Vec::new(),
    }
}

/// `с DD.MM по DD.MM` from the first and last dated blocks.
fn derive_period(schedule: &[DayBlock]) -> String {
    let mut dates = schedule.iter().map(|b| b.date.as_str()).filter(|d| !d.is_empty());
    match (dates.next(), dates.last()) {
        (Some(first), Some(last)) => format!("с {first} по {last}"),
        (Some(only), None) => format!("с {only} по {only}"),
        _ => String::new(),
    }
}

pub fn build_response(report: &ScanReport, config: &ScannerConfig) -> ScheduleResponse {
    let mut blocks: BTreeMap<Weekday, DayBlock> = BTreeMap::new();

    for header in &report.headers {
        let block = blocks
            .entry(header.day)
            .or_insert_with(|| empty_block(header.day));
        if block.date.is_empty() {
            block.date = header.date.clone();
        }
    }

    for cell in &report.cells {
        blocks
            .entry(cell.day)
            .or_insert_with(|| empty_block(cell.day))
            .lectures
            .push(entry_from_cell(cell, config));
    }

    let schedule: Vec<DayBlock> = blocks.into_values().collect();
    let period = report
        .period
        .clone()
        .unwrap_or_else(|| derive_period(&schedule));

    ScheduleResponse::new(schedule, period)
}
