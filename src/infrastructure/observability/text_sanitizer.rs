const MAX_VISIBLE_CHARS: usize = 100;

/// Prepares user-supplied chat text for logging: single line, bounded
/// length, credentials redacted.
pub fn sanitize_text(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flattened.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = flattened.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = flattened.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        flattened
    };

    redact_sensitive_patterns(&visible)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("/bot", "/bot[REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let start = idx + pattern.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | '/'))
                .map(|i| start + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
