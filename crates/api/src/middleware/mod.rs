/// CORS preflight handling and shared CORS header values
pub mod cors;
/// Mapping of domain errors to JSON HTTP responses
pub mod error_handling;
