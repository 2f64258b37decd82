//! Small helpers shared by the client and the extension composer.
use serde_json::Value;
use url::form_urlencoded;

use crate::error::LcdClientError;

/// Compares the content of two slices for equality, ignoring the container they came from.
///
/// Equality means equal length and every element comparing equal with `==`. This lets a
/// `&[u8]` be compared against a `Vec<u8>` or a fixed size array.
pub fn array_content_equals<A, B>(a: &[A], b: &[B]) -> bool
where
    A: PartialEq<B>,
{
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

pub fn ensure(condition: bool, msg: &str) -> Result<(), LcdClientError> {
    if condition {
        Ok(())
    } else {
        Err(LcdClientError::Assertion(msg.to_string()))
    }
}

pub fn assert_defined<T>(value: Option<T>, msg: &str) -> Result<T, LcdClientError> {
    value.ok_or_else(|| LcdClientError::Assertion(msg.to_string()))
}

pub fn is_non_null_object(value: &Value) -> bool {
    value.is_object()
}

/// Type names as a JSON client would report them.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The LCD encodes empty lists as `null`; this turns those back into empty vectors.
pub fn normalize_lcd_api_array<T>(backend: Option<Vec<T>>) -> Vec<T> {
    backend.unwrap_or_default()
}

/// Percent-encodes `value` for use as a single URL path segment, so that `/`, `?` or `#` in
/// an address or denom cannot change the route.
pub fn encode_path_segment(value: &str) -> String {
    // form encoding writes spaces as `+` and encodes a literal `+` as `%2B`
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;
    use serde_json::json;

    #[assay]
    fn content_equality() {
        let bytes: [u8; 3] = [1, 2, 3];

        assert!(array_content_equals(&bytes, &vec![1u8, 2, 3]));
        assert!(array_content_equals::<u8, u8>(&[], &[]));
        assert!(!array_content_equals(&bytes, &[1u8, 2]));
        assert!(!array_content_equals(&bytes, &[1u8, 2, 4]));
        assert!(!array_content_equals(
            &[json!(1), json!(2)],
            &[json!(1), json!("2")]
        ));
        assert!(array_content_equals(&[json!("a")], &[json!("a")]));
    }

    #[assay]
    fn assertions() {
        assert!(ensure(true, "unused").is_ok());
        assert_eq!(
            ensure(false, "must hold").unwrap_err().to_string(),
            "must hold"
        );
        assert_eq!(assert_defined(Some(5), "unused").unwrap(), 5);
        assert!(matches!(
            assert_defined::<u8>(None, "missing"),
            Err(LcdClientError::Assertion(_))
        ));
    }

    #[assay]
    fn type_names_and_guards() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(4.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({})), "object");

        assert!(is_non_null_object(&json!({})));
        assert!(!is_non_null_object(&json!(null)));
        assert!(!is_non_null_object(&json!([])));
    }

    #[assay]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("0")));
    }

    #[assay]
    fn normalizes_missing_arrays() {
        assert_eq!(normalize_lcd_api_array::<u8>(None), Vec::<u8>::new());
        assert_eq!(normalize_lcd_api_array(Some(vec![1, 2])), vec![1, 2]);
    }

    #[assay]
    fn encodes_path_segments() {
        assert_eq!(encode_path_segment("cosmos1abc"), "cosmos1abc");
        assert_eq!(encode_path_segment("ibc/27394FB0"), "ibc%2F27394FB0");
        assert_eq!(encode_path_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(encode_path_segment("a b+c"), "a%20b%2Bc");
        assert_eq!(encode_path_segment("u-atom.x_y"), "u-atom.x_y");
    }
}
