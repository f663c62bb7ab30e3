//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias → URL mapping
//! - [`NewUrlRecord`] - Input for inserting a record

pub mod url_record;

pub use url_record::{NewUrlRecord, RECORD_LIFETIME_DAYS, UrlRecord};
