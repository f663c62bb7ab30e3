//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias resolution and creation
//! - [`services::authorizer::AuthService`] - Bearer token authorization

pub mod services;
