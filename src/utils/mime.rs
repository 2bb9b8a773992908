//! Content type inference with the JavaScript module override.

/// Content type reported for JavaScript modules.
pub const JAVASCRIPT_MIME: &str = "application/javascript";

/// Extensions always served as [`JAVASCRIPT_MIME`], matched case-sensitively.
const JAVASCRIPT_EXTENSIONS: &[&str] = &[".js", ".mjs"];

/// Return the forced content type for JavaScript module paths, if any.
///
/// Browsers refuse to load ES modules with a non-JavaScript type, and the
/// default tables disagree on `.mjs`, so these are pinned.
pub fn javascript_override(path: &str) -> Option<&'static str> {
    JAVASCRIPT_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext))
        .then_some(JAVASCRIPT_MIME)
}

/// Infer a content type for a path, applying the JavaScript override first.
pub fn guess_mime_type(path: &str) -> String {
    match javascript_override(path) {
        Some(mime) => mime.to_string(),
        None => mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string(),
    }
}
