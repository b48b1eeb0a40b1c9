//! # Schedule Scraper
//!
//! Fetches the college's timetable page and turns it into a
//! [`ScheduleResponse`](schedule_core::models::schedule::ScheduleResponse).
//!
//! - **fetcher**: one HTTP GET, no retry
//! - **scanner**: tag/text event walk that classifies table cells
//! - **assemble**: groups scanned cells into day blocks

pub mod assemble;
pub mod config;
pub mod fetcher;
pub mod scanner;

pub mod mock;

use schedule_core::{errors::ScheduleResult, models::schedule::ScheduleResponse};
use tracing::info;

use config::ScannerConfig;
use fetcher::PageFetcher;
use scanner::TableScanner;

/// Scans already fetched markup. Never fails; unmatched pages give an empty schedule.
pub fn parse_schedule(markup: &str, config: &ScannerConfig) -> ScheduleResponse {
    let report = TableScanner::new(config).scan(markup);
    assemble::build_response(&report, config)
}

/// Fetches the page once and converts it.
pub async fn scrape_schedule(
    fetcher: &dyn PageFetcher,
    config: &ScannerConfig,
) -> ScheduleResult<ScheduleResponse> {
    let markup = fetcher.fetch_page().await?;
    let response = parse_schedule(&markup, config);

    info!(
        days = response.schedule.len(),
        lectures = response.schedule.iter().map(|b| b.lectures.len()).sum::<usize>(),
        "Parsed schedule page"
    );

    Ok(response)
}
