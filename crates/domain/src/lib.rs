//! # ClassCal Domain
//!
//! Business domain types for turning a weekly class timetable into calendar
//! events.
//!
//! This crate contains:
//! - Weekday identifiers and the weekday → date anchor mapping
//! - Class events and their wire representation
//! - Parse diagnostics
//! - Configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other ClassCal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
