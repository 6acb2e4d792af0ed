//! Markup escaping shared by page and sitemap rendering.

/// Escape text for use in HTML/XML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn test_escape_passes_through_unicode() {
        assert_eq!(escape("مرحبا שלום"), "مرحبا שלום");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }
}
