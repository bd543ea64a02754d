//! Nested key lookup over JSON mapping structures.
//!
//! Region names are stored as a JSON tree and every region accessor reads it
//! through [`get`], so "missing key", "wrong container type" and "deep path"
//! are handled in one place.

use serde_json::Value;

/// Separator between the segments of a nested key.
pub const PATH_SEPARATOR: char = '.';

/// Get an item from an object or array by key, with dotted paths for nested access.
///
/// - A `container` that is not an object or array returns `default`.
/// - `key == None` returns `container` itself.
/// - A key that exists verbatim (even one containing dots) wins over path traversal.
/// - A plain key that is absent returns `default`.
/// - A dotted key walks each segment and returns `default` on the first miss.
///
/// Array segments are indices written in canonical decimal form (`"0"`, `"12"`).
pub fn get<'a>(container: &'a Value, key: Option<&str>, default: &'a Value) -> &'a Value {
    if !is_container(container) {
        return default;
    }

    let Some(key) = key else {
        return container;
    };

    if let Some(value) = child(container, key) {
        return value;
    }

    if !key.contains(PATH_SEPARATOR) {
        return default;
    }

    let mut current = container;
    for segment in key.split(PATH_SEPARATOR) {
        match child(current, segment) {
            Some(value) => current = value,
            None => return default,
        }
    }

    current
}

/// [`get`] narrowed to string leaves; anything else is `None`.
pub fn get_str<'a>(container: &'a Value, key: &str) -> Option<&'a str> {
    get(container, Some(key), &Value::Null).as_str()
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn child<'a>(container: &'a Value, segment: &str) -> Option<&'a Value> {
    match container {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

fn array_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0" || (!segment.starts_with('0') && !segment.is_empty());
    if !canonical || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "province": { "31": "DKI Jakarta" },
            "parts": ["Cempaka Putih", "10510"],
            "a.b": "verbatim",
            "empty": null
        })
    }

    #[test]
    fn test_get_non_container_returns_default() {
        let default = json!("fallback");
        assert_eq!(get(&json!("text"), Some("x"), &default), &default);
        assert_eq!(get(&Value::Null, None, &default), &default);
        assert_eq!(get(&json!(42), Some("0"), &default), &default);
    }

    #[test]
    fn test_get_without_key_returns_container() {
        let data = sample();
        assert_eq!(get(&data, None, &Value::Null), &data);
    }

    #[test]
    fn test_get_plain_key() {
        let data = sample();
        assert_eq!(get(&data, Some("a.b"), &Value::Null), &json!("verbatim"));
        assert_eq!(get(&data, Some("missing"), &json!([])), &json!([]));
        assert_eq!(get(&data, Some("empty"), &json!("x")), &Value::Null);
    }

    #[test]
    fn test_get_dotted_path() {
        let data = sample();
        assert_eq!(get_str(&data, "province.31"), Some("DKI Jakarta"));
        assert_eq!(get_str(&data, "parts.1"), Some("10510"));
        assert_eq!(get_str(&data, "province.99"), None);
        assert_eq!(get_str(&data, "parts.2"), None);
        assert_eq!(get_str(&data, "province.31.deeper"), None);
    }

    #[test]
    fn test_get_array_index_must_be_canonical() {
        let data = json!(["zero", "one"]);
        assert_eq!(get_str(&data, "0"), Some("zero"));
        assert_eq!(get_str(&data, "1"), Some("one"));
        assert_eq!(get_str(&data, "01"), None);
        assert_eq!(get_str(&data, "-1"), None);
        assert_eq!(get_str(&data, ""), None);
    }
}
