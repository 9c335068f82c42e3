use serde_json::Value as JsonValue;

use crate::invoke::HttpResponseParts;

/// Parses a response body into the operation's output value.
///
/// JSON content types (and bodies without a content type that happen to be JSON) become
/// structured values; anything else is returned as text. An empty body is `null`.
pub fn parse_body(resp: &HttpResponseParts) -> JsonValue {
    if resp.body.is_empty() {
        return JsonValue::Null;
    }

    let declared_json = resp.content_type().map(is_json_media_type);
    if declared_json != Some(false) {
        if let Ok(v) = serde_json::from_slice::<JsonValue>(&resp.body) {
            return v;
        }
    }

    JsonValue::String(String::from_utf8_lossy(&resp.body).into_owned())
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
