//! HTTP request handlers for the web server.

mod static_files;

pub use static_files::{directory_listing, javascript_content_type};
