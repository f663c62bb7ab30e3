//! HTTP request handlers.

pub mod create_url;
pub mod docs;
pub mod health;
pub mod redirect;

pub use create_url::create_url_handler;
pub use docs::{docs_handler, openapi_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
