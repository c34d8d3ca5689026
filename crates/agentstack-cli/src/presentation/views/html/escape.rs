/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `url` when it is an `http(s)` link or a fragment, otherwise `"#"`.
pub fn safe_url(url: &str) -> &str {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") || url.starts_with('#') {
        url
    } else {
        "#"
    }
}

/// JSON for a `<script>` block: `</` cannot close the element early.
pub fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<img src="x" onerror=alert(1)> & more"#),
            "&lt;img src=&quot;x&quot; onerror=alert(1)&gt; &amp; more"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape("Devin's 🤖 agent"), "Devin's 🤖 agent");
    }

    #[test]
    fn test_script_json_breaks_closing_tags() {
        assert_eq!(script_json(r#"{"name":"</script>"}"#), r#"{"name":"<\/script>"}"#);
    }

    #[test]
    fn test_safe_url_keeps_web_links_only() {
        assert_eq!(safe_url("https://devin.ai"), "https://devin.ai");
        assert_eq!(safe_url(" HTTP://example.com "), "HTTP://example.com");
        assert_eq!(safe_url("#"), "#");
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url("  JavaScript:alert(1)"), "#");
        assert_eq!(safe_url("data:text/html,<b>x</b>"), "#");
        assert_eq!(safe_url("//evil.example"), "#");
    }
}
