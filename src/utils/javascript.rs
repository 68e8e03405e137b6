use crate::core::BrowserTrait;
use crate::errors::Result;
use std::time::Instant;

/// Quote a Rust string as a JavaScript string literal, escaping quotes,
/// backslashes and control characters. JSON string syntax is valid
/// JavaScript, so the JSON encoder does the escaping.
pub fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Collapse runs of whitespace and trim, mirroring how the in-page matcher
/// normalizes text before comparison.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Poll a boolean JavaScript condition until it holds or the budget runs out.
/// Returns whether the condition became true; callers decide whether a false
/// result is an error.
pub async fn wait_for_condition<B: BrowserTrait>(
    browser: &B,
    tab: &B::TabHandle,
    condition: &str,
    timeout_ms: u64,
    poll_interval_ms: u64,
) -> Result<bool> {
    let start = Instant::now();
    let timeout = tokio::time::Duration::from_millis(timeout_ms);
    let poll_interval = tokio::time::Duration::from_millis(poll_interval_ms);

    loop {
        let result = browser.evaluate(tab, condition).await?;
        if result.as_bool() == Some(true) {
            return Ok(true);
        }
        if start.elapsed() >= timeout {
            return Ok(false);
        }
        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_wraps_in_double_quotes() {
        assert_eq!(quote("Phones"), r#""Phones""#);
    }

    #[test]
    fn quote_escapes_embedded_quotes_and_backslashes() {
        assert_eq!(quote(r#"a"b"#), r#""a\"b""#);
        assert_eq!(quote(r"a\b"), r#""a\\b""#);
    }

    #[test]
    fn quote_escapes_newlines() {
        assert_eq!(quote("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  Home \n (current) "), "Home (current)");
        assert_eq!(normalize_text("Cart"), "Cart");
    }
}
