//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - URL record storage

pub mod persistence;
