/// Escape text for interpolation into HTML markup.
///
/// This is the platform's only injection defense: every dynamic value that
/// ends up inside a rendered fragment goes through here. The ampersand is
/// replaced first so the entities introduced by the later substitutions are
/// not escaped twice.
pub fn escape_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Truncate to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
