//! Business logic services for the application layer.

pub mod authorizer;
pub mod url_service;

pub use authorizer::{AuthService, Authorizer, StaticTokenAuthorizer};
pub use url_service::{CreatedUrl, UrlService};
