// Parameter values for template expansion

use indexmap::IndexMap;

/// A value a template variable can expand to.
///
/// Scalars cover strings, numbers, and booleans, which expand through
/// their display form. Lists and maps render their items in insertion
/// order. `Absent`, an empty list, and an empty map all contribute no
/// output at all, not even a separator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Absent,
    Scalar(String),
    List(Vec<String>),
    Map(IndexMap<String, String>),
}

impl Value {
    /// True when the value contributes nothing to the expansion
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Scalar(_) => false,
            Value::List(items) => items.is_empty(),
            Value::Map(pairs) => pairs.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Scalar(flag.to_string())
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::List(items.iter().map(|item| item.to_string()).collect())
    }
}

impl From<IndexMap<String, String>> for Value {
    fn from(pairs: IndexMap<String, String>) -> Self {
        Value::Map(pairs)
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Value::Map(pairs.into_iter().collect())
    }
}

impl From<&[(&str, &str)]> for Value {
    fn from(pairs: &[(&str, &str)]) -> Self {
        Value::Map(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Coercion from JSON parameter values.
///
/// `null` is absent, numbers and booleans become their literal text, and
/// object key order is preserved. A compound value nested inside a list or
/// an object has no flat expansion of its own, so it is stringified to its
/// JSON text.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(flag) => Value::Scalar(flag.to_string()),
            serde_json::Value::Number(number) => Value::Scalar(number.to_string()),
            serde_json::Value::String(text) => Value::Scalar(text),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(scalar_text).collect())
            }
            serde_json::Value::Object(pairs) => Value::Map(
                pairs
                    .into_iter()
                    .map(|(key, value)| (key, scalar_text(value)))
                    .collect(),
            ),
        }
    }
}

fn scalar_text(json: serde_json::Value) -> String {
    match json {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from("value"), Value::Scalar("value".to_string()));
        assert_eq!(Value::from(42i64), Value::Scalar("42".to_string()));
        assert_eq!(Value::from(true), Value::Scalar("true".to_string()));
        assert_eq!(Value::from(2.5f64), Value::Scalar("2.5".to_string()));
    }

    #[test]
    fn test_list_conversion_keeps_order() {
        let value = Value::from(vec!["red", "green", "blue"]);
        assert_eq!(
            value,
            Value::List(vec![
                "red".to_string(),
                "green".to_string(),
                "blue".to_string()
            ])
        );
    }

    #[test]
    fn test_pair_conversion_keeps_order() {
        let value = Value::from(&[("semi", ";"), ("dot", "."), ("comma", ",")][..]);
        match value {
            Value::Map(pairs) => {
                let keys: Vec<&String> = pairs.keys().collect();
                assert_eq!(keys, ["semi", "dot", "comma"]);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_absence() {
        assert!(Value::Absent.is_absent());
        assert!(Value::List(Vec::new()).is_absent());
        assert!(Value::Map(IndexMap::new()).is_absent());
        assert!(!Value::Scalar(String::new()).is_absent());
    }

    #[test]
    fn test_json_null_is_absent() {
        assert_eq!(Value::from(json!(null)), Value::Absent);
    }

    #[test]
    fn test_json_scalars_stringify() {
        assert_eq!(Value::from(json!(17)), Value::Scalar("17".to_string()));
        assert_eq!(Value::from(json!(false)), Value::Scalar("false".to_string()));
        assert_eq!(Value::from(json!("x")), Value::Scalar("x".to_string()));
    }

    #[test]
    fn test_json_array_becomes_list() {
        assert_eq!(
            Value::from(json!(["red", 2, true])),
            Value::List(vec![
                "red".to_string(),
                "2".to_string(),
                "true".to_string()
            ])
        );
    }

    #[test]
    fn test_json_object_preserves_insertion_order() {
        let value = Value::from(json!({"semi": ";", "dot": ".", "comma": ","}));
        match value {
            Value::Map(pairs) => {
                let keys: Vec<&String> = pairs.keys().collect();
                assert_eq!(keys, ["semi", "dot", "comma"]);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_json_nested_compound_stringifies() {
        assert_eq!(
            Value::from(json!([["a", "b"]])),
            Value::List(vec!["[\"a\",\"b\"]".to_string()])
        );
    }
}
