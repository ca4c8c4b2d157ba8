use serde_json::json;
use serde_json::Value;

/// Returns `message 1` through `message {count}`.
pub fn numbered_lines(count: usize) -> Vec<String> {
    return (1..=count)
        .map(|idx| return format!("message {idx}"))
        .collect::<Vec<String>>();
}

/// Builds a Google Translate web response body from pairs of
/// (translated, original) segments.
pub fn google_translate_body(segments: &[(&str, &str)]) -> String {
    let translated = segments
        .iter()
        .map(|(translated, original)| {
            return json!([translated, original, Value::Null, Value::Null, 10]);
        })
        .collect::<Vec<Value>>();

    return json!([translated, Value::Null, "en"]).to_string();
}
