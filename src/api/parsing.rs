use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use tracing::warn;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a proxy event.
///
/// HTTP API (v2) and function URL events carry it under
/// `requestContext.http.method`; REST API (v1) events use `httpMethod`.
pub fn http_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn is_post(payload: &Value) -> bool {
    http_method(payload).is_some_and(|m| m.eq_ignore_ascii_case("POST"))
}

/// Raw body text, base64-decoded when the event says so.
pub fn extract_body(payload: &Value) -> Option<String> {
    let body = payload.get("body")?.as_str()?;

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Some(body.to_string());
    }

    match STANDARD.decode(body) {
        Ok(bytes) => String::from_utf8(bytes)
            .map_err(|e| warn!("Base64 body is not UTF-8: {}", e))
            .ok(),
        Err(e) => {
            warn!("Failed to decode base64 body: {}", e);
            None
        }
    }
}

/// Decodes the request body as JSON.
///
/// Missing, malformed, or non-object bodies become an empty object so that
/// validation reports the missing field rather than a parse failure.
pub fn parse_json_body(payload: &Value) -> Value {
    extract_body(payload)
        .and_then(|body| serde_json::from_str::<Value>(&body).ok())
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(Map::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_from_http_api_v2() {
        let event = json!({ "requestContext": { "http": { "method": "POST" } } });
        assert_eq!(http_method(&event), Some("POST"));
        assert!(is_post(&event));
    }

    #[test]
    fn method_from_rest_api_v1() {
        let event = json!({ "httpMethod": "get" });
        assert_eq!(http_method(&event), Some("get"));
        assert!(!is_post(&event));
        assert!(is_post(&json!({ "httpMethod": "post" })));
    }

    #[test]
    fn missing_method_is_not_post() {
        assert!(!is_post(&json!({ "body": "{}" })));
    }

    #[test]
    fn base64_body_is_decoded() {
        let event = json!({
            "body": STANDARD.encode(r#"{"company":"Acme"}"#),
            "isBase64Encoded": true
        });
        assert_eq!(parse_json_body(&event), json!({ "company": "Acme" }));
    }

    #[test]
    fn bad_bodies_become_empty_objects() {
        for event in [
            json!({}),
            json!({ "body": "not json" }),
            json!({ "body": "[1,2]" }),
            json!({ "body": "%%%", "isBase64Encoded": true }),
        ] {
            assert_eq!(parse_json_body(&event), json!({}), "{event}");
        }
    }
}
