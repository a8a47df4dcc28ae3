//! # Error Types
//!
//! Custom error types for the timetable search. The core has no fatal
//! paths of its own — malformed input degrades silently per the parsing
//! policy — so the variants cover misconfiguration and the empty-population
//! edge the evolution loop must guard against.

use thiserror::Error;

/// Represents errors that can occur while configuring or running the
/// timetable search.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// An invalid configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An empty population was encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized `Result` type for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;
