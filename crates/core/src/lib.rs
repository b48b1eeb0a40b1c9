//! # Schedule Core
//!
//! Shared data model and error types for the college schedule service.
//! Everything here is plain data: the scraper crate produces these values and
//! the API crate serializes them.

/// Error taxonomy shared by the scraper and the API
pub mod errors;
/// Response payloads and the fixed group catalog
pub mod models;
