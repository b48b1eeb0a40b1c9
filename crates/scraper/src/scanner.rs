//! # Table Scanner
//!
//! Walks the schedule page as a stream of open-tag, text and close-tag events
//! and picks out day headers and subject cells. Classification is positional
//! and colour based (see [`ScannerConfig`]); it is tied to how the college
//! exports its timetable and is not a general table model.
//!
//! The scanner never fails. A page without matching cells yields an empty
//! [`ScanReport`].

use regex::Regex;
use schedule_core::models::schedule::Weekday;
use scraper::Html;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::config::ScannerConfig;

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})\.(\d{2})\b").expect("date regex is valid"))
}

fn period_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)с\s*(\d{2}\.\d{2}\.\d{4})\s*по\s*(\d{2}\.\d{2}\.\d{4})")
            .expect("period regex is valid")
    })
}

/// Extracts the first `DD.MM` date from header text, zero padding the day.
pub fn extract_date(text: &str) -> Option<String> {
    date_regex()
        .captures(text)
        .map(|caps| format!("{:0>2}.{}", &caps[1], &caps[2]))
}

/// Work list entry for the document walk. The walk is iterative, so nesting
/// depth is bounded by the heap rather than the thread stack.
enum Step<N> {
    Open(N),
    Close(N),
}

/// The attributes the classifier looks at on a cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagAttrs<'a> {
    pub bgcolor: Option<&'a str>,
    pub colspan: Option<&'a str>,
}

impl TagAttrs<'_> {
    /// Missing or malformed spans count as 1.
    pub fn colspan(&self) -> usize {
        self.colspan
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// One subject cell together with the position it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedCell {
    pub day: Weekday,
    pub row: usize,
    pub column: usize,
    /// Text of the row's time column, empty if the row had none
    pub time: String,
    pub fragments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub day: Weekday,
    /// `DD.MM` if the header printed one
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub cells: Vec<ScannedCell>,
    pub headers: Vec<DayHeader>,
    /// `с DD.MM.YYYY по DD.MM.YYYY` as printed on the page
    pub period: Option<String>,
    pub current_day: Option<Weekday>,
    pub rows: usize,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.headers.is_empty()
    }
}

/// Per-request scan state. Create one per document.
pub struct TableScanner<'a> {
    config: &'a ScannerConfig,
    row_index: usize,
    col_index: usize,
    in_cell: bool,
    in_header_cell: bool,
    in_subject_cell: bool,
    in_time_cell: bool,
    header_has_day: bool,
    current_day: Option<Weekday>,
    current_text: Vec<String>,
    row_time: String,
    report: ScanReport,
}

impl<'a> TableScanner<'a> {
    pub fn new(config: &'a ScannerConfig) -> Self {
        Self {
            config,
            row_index: 0,
            col_index: 0,
            in_cell: false,
            in_header_cell: false,
            in_subject_cell: false,
            in_time_cell: false,
            header_has_day: false,
            current_day: None,
            current_text: Vec::new(),
            row_time: String::new(),
            report: ScanReport::default(),
        }
    }

    /// Parses `markup` and runs every element and text node through the scanner.
    pub fn scan(mut self, markup: &str) -> ScanReport {
        let document = Html::parse_document(markup);
        self.walk(&document);

        let report = self.finish();
        debug!(
            rows = report.rows,
            headers = report.headers.len(),
            cells = report.cells.len(),
            "Scanned schedule table"
        );
        report
    }

    fn walk(&mut self, document: &Html) {
        let mut pending = vec![Step::Open(document.tree.root())];

        while let Some(step) = pending.pop() {
            match step {
                Step::Open(node) => {
                    if let Some(tag) = node.value().as_element() {
                        let attrs = TagAttrs {
                            bgcolor: tag.attr("bgcolor"),
                            colspan: tag.attr("colspan"),
                        };
                        self.open_tag(tag.name(), attrs);
                        pending.push(Step::Close(node));
                    } else if let Some(text) = node.value().as_text() {
                        self.text(text);
                    }
                    pending.extend(node.children().rev().map(Step::Open));
                }
                Step::Close(node) => {
                    if let Some(tag) = node.value().as_element() {
                        self.close_tag(tag.name());
                    }
                }
            }
        }
    }

    pub fn open_tag(&mut self, name: &str, attrs: TagAttrs<'_>) {
        match name {
            "tr" => {
                self.row_index += 1;
                self.col_index = 0;
                self.row_time.clear();
            }
            "td" | "th" => {
                self.in_cell = true;
                let colspan = attrs.colspan();
                let is_header_colour = attrs.bgcolor == Some(self.config.header_bgcolor.as_str());

                if is_header_colour && colspan > self.config.header_min_colspan {
                    self.in_header_cell = true;
                    self.header_has_day = false;
                } else if self.col_index >= self.config.first_subject_column
                    && colspan == self.config.subject_colspan
                {
                    self.in_subject_cell = true;
                } else if self.col_index == self.config.time_column {
                    self.in_time_cell = true;
                }
            }
            _ => {}
        }
    }

    pub fn text(&mut self, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        if self.report.period.is_none() {
            if let Some(caps) = period_regex().captures(text) {
                self.report.period = Some(format!("с {} по {}", &caps[1], &caps[2]));
            }
        }

        if self.in_header_cell {
            if let Some(day) = self.config.match_day(text) {
                debug!(%day, row = self.row_index, "Found day header");
                self.current_day = Some(day);
                self.header_has_day = true;
                self.report.headers.push(DayHeader {
                    day,
                    date: String::new(),
                });
            }
            if self.header_has_day {
                if let (Some(date), Some(header)) = (extract_date(text), self.report.headers.last_mut()) {
                    if header.date.is_empty() {
                        header.date = date;
                    }
                }
            }
        } else if self.in_subject_cell {
            self.current_text.push(text.to_string());
        } else if self.in_time_cell {
            if !self.row_time.is_empty() {
                self.row_time.push(' ');
            }
            self.row_time.push_str(text);
        }
    }

    pub fn close_tag(&mut self, name: &str) {
        // Closing a cell that was never opened changes nothing
        if !matches!(name, "td" | "th") || !self.in_cell {
            return;
        }

        if self.in_subject_cell && !self.current_text.is_empty() {
            match self.current_day {
                Some(day) => self.report.cells.push(ScannedCell {
                    day,
                    row: self.row_index,
                    column: self.col_index,
                    time: self.row_time.clone(),
                    fragments: std::mem::take(&mut self.current_text),
                }),
                None => trace!(row = self.row_index, "Subject cell before any day header"),
            }
        }

        self.in_cell = false;
        self.in_subject_cell = false;
        self.in_header_cell = false;
        self.in_time_cell = false;
        self.current_text.clear();
        self.col_index += 1;
    }

    pub fn finish(mut self) -> ScanReport {
        self.report.current_day = self.current_day;
        self.report.rows = self.row_index;
        self.report
    }

    pub fn current_day(&self) -> Option<Weekday> {
        self.current_day
    }

    pub fn current_text(&self) -> &[String] {
        &self.current_text
    }

    pub fn in_header_cell(&self) -> bool {
        self.in_header_cell
    }

    pub fn in_subject_cell(&self) -> bool {
        self.in_subject_cell
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn col_index(&self) -> usize {
        self.col_index
    }
}
