//! HTML templates for the web server.

use crate::utils::html_escape;

/// A single row in a directory listing.
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Render a directory listing page for `path`.
pub fn directory_listing(path: &str, entries: &[ListingEntry]) -> String {
    let mut rows = String::new();

    for entry in entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        rows.push_str(&format!(
            "<li><a href=\"{}{}\">{}{}</a></li>\n",
            urlencoding::encode(&entry.name),
            suffix,
            html_escape(&entry.name),
            suffix
        ));
    }

    let title = format!("Directory listing for {}", html_escape(path));

    format!(
        r#"<!DOCTYPE HTML>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
</head>
<body>
<h1>{}</h1>
<hr>
<ul>
{}</ul>
<hr>
</body>
</html>
"#,
        title, title, rows
    )
}
