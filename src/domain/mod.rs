//! Domain layer: entities, repository contracts, and the clock abstraction.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by
//! [`crate::infrastructure::persistence`].
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Injectable time source

pub mod clock;
pub mod entities;
pub mod repositories;
