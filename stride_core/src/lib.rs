#![forbid(unsafe_code)]

//! Core domain model and business logic for the Stride fitness system.
//!
//! This crate provides:
//! - Domain types (workouts, variant readings, reports)
//! - The metrics calculator (distance, mean speed, calories)
//! - The summary formatter
//!
//! Everything here is pure and synchronous. Dispatch from sensor packet
//! codes and all I/O live in the CLI crate.

pub mod types;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
