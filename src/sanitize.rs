//! Output sanitization for untrusted string fields.
//!
//! Titles and descriptions are caller-supplied and get embedded in pages by
//! API consumers, so every copy leaving the service has HTML metacharacters
//! neutralized. The stored record keeps the raw text; escaping happens on
//! the serialization copy only.

/// Escapes the HTML metacharacters in `input`.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_passes_through() {
        assert_eq!(escape_html("Google"), "Google");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn script_tag_is_neutralized() {
        let escaped = escape_html("<script>alert(\"xss\")</script>");
        assert!(!escaped.contains("<script>"));
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn ampersand_escaped_first() {
        // Escaping must not double-process its own output within one pass.
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn quotes_and_event_handlers() {
        let escaped = escape_html("\" onerror='alert(1)'");
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert_eq!(escaped, "&quot; onerror=&#x27;alert(1)&#x27;");
    }

    #[test]
    fn multibyte_text_untouched() {
        assert_eq!(escape_html("bøker å lese"), "bøker å lese");
    }
}
