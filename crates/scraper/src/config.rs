//! # Scraper Configuration
//!
//! Everything that ties the scraper to the layout of one particular page lives
//! here, so a change on the college site means editing values rather than
//! the scanning code.

use schedule_core::models::schedule::Weekday;
use std::time::Duration;

/// Published schedule page of the energy department.
pub const DEFAULT_SCHEDULE_URL: &str = "https://uecoll.ru/wp-content/uploads/energy/10_1_6.html";

/// The site rejects requests without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// How to reach the upstream page.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    pub user_agent: String,
    /// Upper bound for the whole GET, connect included
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SCHEDULE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            max_redirects: 5,
        }
    }
}

/// Cell classification rules for the schedule table.
///
/// A day header is a cell whose `bgcolor` equals [`header_bgcolor`] and whose
/// `colspan` is strictly greater than [`header_min_colspan`]. A subject cell is
/// a cell at or beyond [`first_subject_column`] spanning exactly
/// [`subject_colspan`] columns.
///
/// [`header_bgcolor`]: ScannerConfig::header_bgcolor
/// [`header_min_colspan`]: ScannerConfig::header_min_colspan
/// [`first_subject_column`]: ScannerConfig::first_subject_column
/// [`subject_colspan`]: ScannerConfig::subject_colspan
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub header_bgcolor: String,
    pub header_min_colspan: usize,
    pub subject_colspan: usize,
    /// Zero-based cell ordinal of the first group column
    pub first_subject_column: usize,
    /// Zero-based cell ordinal holding the lesson time
    pub time_column: usize,
    /// Letter-spaced labels printed in header cells. Checked in order, first hit wins.
    pub day_labels: Vec<(String, Weekday)>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            header_bgcolor: "green".to_string(),
            header_min_colspan: 10,
            subject_colspan: 2,
            first_subject_column: 2,
            time_column: 1,
            day_labels: vec![
                ("П О Н Е Д Е Л Ь Н И К".to_string(), Weekday::Monday),
                ("В Т О Р Н И К".to_string(), Weekday::Tuesday),
                ("С Р Е Д А".to_string(), Weekday::Wednesday),
                ("Ч Е Т В Е Р Г".to_string(), Weekday::Thursday),
                ("П Я Т Н И Ц А".to_string(), Weekday::Friday),
            ],
        }
    }
}

impl ScannerConfig {
    /// Resolves header text to a weekday, if any label occurs in it.
    pub fn match_day(&self, text: &str) -> Option<Weekday> {
        self.day_labels
            .iter()
            .find(|(label, _)| text.contains(label.as_str()))
            .map(|(_, day)| *day)
    }
}
