//! Shared utility functions.
//!
//! - `html`: HTML escaping for directory listings
//! - `mime`: content type inference with the JavaScript module override

mod html;
mod mime;

pub use html::html_escape;
pub use mime::{guess_mime_type, javascript_override, JAVASCRIPT_MIME};
