//! jsvendor - vendored JavaScript dependencies for local development.
//!
//! Two independent pieces:
//! - [`fetcher`] downloads a fixed manifest of CDN files into `js/`
//! - [`server`] serves the working directory with permissive CORS and
//!   JavaScript module MIME types

pub mod cli;
pub mod config;
pub mod fetcher;
pub mod http_client;
pub mod server;
pub mod utils;
