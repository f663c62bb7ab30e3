//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and tracing middleware
//! - [`routes`] - Route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
