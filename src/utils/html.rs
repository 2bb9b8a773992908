//! HTML escaping utilities.

/// Escape text for use in HTML element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_names_unchanged() {
        assert_eq!(html_escape("three.module.js"), "three.module.js");
    }

    #[test]
    fn test_markup_in_file_names() {
        assert_eq!(
            html_escape("<b>\"Tom's\" & co</b>"),
            "&lt;b&gt;&quot;Tom&#x27;s&quot; &amp; co&lt;/b&gt;"
        );
    }
}
