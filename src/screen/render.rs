//! Payload rendering: opaque structured values to display text.

use serde_json::Value;

/// Render a payload to a single line of display text.
///
/// Uses the compact JSON serialization of the value; with `strip_quotes`
/// every `"` character is removed afterwards. Rendering is deterministic:
/// the same payload always yields the same text.
pub fn render_payload(payload: &Value, strip_quotes: bool) -> String {
    let text = payload.to_string();
    if strip_quotes {
        text.replace('"', "")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_object() {
        assert_eq!(render_payload(&json!({"i": 7}), false), r#"{"i":7}"#);
    }

    #[test]
    fn test_render_strips_quotes() {
        let rendered = render_payload(&json!({"msg": "a \"quoted\" word"}), true);
        assert!(!rendered.contains('"'));
        assert_eq!(rendered, r"{msg:a \quoted\ word}");
    }

    #[test]
    fn test_render_is_idempotent_per_payload() {
        let payload = json!({"nested": {"list": [1, 2, 3]}, "s": "text"});
        assert_eq!(render_payload(&payload, false), render_payload(&payload, false));
        assert_eq!(render_payload(&payload, true), render_payload(&payload, true));
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_payload(&json!(42), false), "42");
        assert_eq!(render_payload(&json!("plain"), false), r#""plain""#);
        assert_eq!(render_payload(&json!("plain"), true), "plain");
        assert_eq!(render_payload(&Value::Null, false), "null");
    }
}
