use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog;

/// Working days covered by the schedule page, in calendar order.
///
/// The derived `Ord` follows declaration order, so sorting blocks by `day`
/// yields Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Понедельник")]
    Monday,
    #[serde(rename = "Вторник")]
    Tuesday,
    #[serde(rename = "Среда")]
    Wednesday,
    #[serde(rename = "Четверг")]
    Thursday,
    #[serde(rename = "Пятница")]
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Canonical Russian name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Понедельник",
            Weekday::Tuesday => "Вторник",
            Weekday::Wednesday => "Среда",
            Weekday::Thursday => "Четверг",
            Weekday::Friday => "Пятница",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    pub time: String,
    pub teacher: String,
    pub room: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBlock {
    pub day: Weekday,
    /// `DD.MM`, empty when the page did not print a date for the day
    pub date: String,
    pub lectures: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule: Vec<DayBlock>,
    pub groups: Vec<String>,
    pub period: String,
}

impl ScheduleResponse {
    /// Builds a response with the fixed group catalog, ordering blocks Monday to Friday.
    pub fn new(mut schedule: Vec<DayBlock>, period: impl Into<String>) -> Self {
        schedule.sort_by_key(|block| block.day);
        Self {
            schedule,
            groups: catalog::groups(),
            period: period.into(),
        }
    }

    /// Keeps only lectures held for `group`. Day blocks and the catalog stay intact.
    pub fn retain_group(&mut self, group: &str) {
        for block in &mut self.schedule {
            block.lectures.retain(|lecture| lecture.group == group);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
