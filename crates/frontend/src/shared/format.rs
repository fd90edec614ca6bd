//! Rendering helpers for the output panels.
//!
//! The service replies with arbitrary JSON; a couple of well-known
//! fields get shown as plain text instead of the full body.

use serde_json::Value;

/// Pretty-print a JSON value.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Text for `/answer` and `/session` responses: a non-empty string
/// `answer` field is shown verbatim, anything else as the full body.
pub fn answer_text(value: &Value) -> String {
    match value.get("answer").and_then(Value::as_str) {
        Some(answer) if !answer.is_empty() => answer.to_string(),
        _ => format_json(value),
    }
}

/// Text for `/timeline` responses: the `items` field when present,
/// the full body otherwise.
pub fn timeline_text(value: &Value) -> String {
    match value.get("items") {
        Some(items) => format_json(items),
        None => format_json(value),
    }
}

/// Inline error line for a failed dispatch.
pub fn error_text(err: &str) -> String {
    format!("Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answer_field_is_shown_verbatim() {
        assert_eq!(answer_text(&json!({"answer": "42"})), "42");
    }

    #[test]
    fn empty_body_pretty_prints_as_braces() {
        assert_eq!(answer_text(&json!({})), "{}");
        assert_eq!(format_json(&json!({})), "{}");
    }

    #[test]
    fn blank_or_non_string_answer_falls_back_to_the_body() {
        assert_eq!(answer_text(&json!({"answer": ""})), "{\n  \"answer\": \"\"\n}");
        let body = json!({"answer": 7});
        assert_eq!(answer_text(&body), format_json(&body));
    }

    #[test]
    fn timeline_prefers_the_items_field() {
        let body = json!({"items": [{"memory_id": "m-1"}], "extra": true});
        assert_eq!(timeline_text(&body), format_json(&json!([{"memory_id": "m-1"}])));
    }

    #[test]
    fn timeline_without_items_shows_the_whole_body() {
        let body = json!({"nodes": []});
        assert_eq!(timeline_text(&body), format_json(&body));
    }

    #[test]
    fn empty_items_list_still_wins_over_the_body() {
        let body = json!({"items": [], "note": "ignored"});
        assert_eq!(timeline_text(&body), "[]");
    }

    #[test]
    fn errors_get_the_inline_prefix() {
        assert_eq!(error_text("Failed to send request: boom"), "Error: Failed to send request: boom");
    }
}
