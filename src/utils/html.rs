/// Escapa texto del servidor antes de meterlo en innerHTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Campo opcional escapado, o el placeholder `N/A`
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape(v),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape("Fila 3 · Asiento 12"), "Fila 3 · Asiento 12");
    }

    #[test]
    fn placeholder_for_missing_or_blank() {
        assert_eq!(or_placeholder(None), "N/A");
        assert_eq!(or_placeholder(Some("   ")), "N/A");
        assert_eq!(or_placeholder(Some("Jane")), "Jane");
    }
}
