//! Utility functions for alias derivation, timestamp rendering, and store
//! error classification.
//!
//! - [`alias_generator`] - Alias derivation and custom alias checks
//! - [`time_format`] - Timestamp string formats
//! - [`db_error`] - `sqlx` error classification

pub mod alias_generator;
pub mod db_error;
pub mod time_format;
