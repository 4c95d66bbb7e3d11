use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Untyped attribute value as read from the wire
///
/// Resources carry no per-type schema, so every attribute lands here.
/// Consumers read it through the coercion accessors in `sideload-document`
/// rather than matching on the variant themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    String(String),
    /// Number with its wire representation preserved (`3` stays `3`, `2.50` becomes `2.5`)
    Number(Number),
    Bool(bool),
    List(Vec<DynamicValue>),
    /// Nested object; some endpoints embed small structured breakdowns
    Object(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    /// Default textual representation
    ///
    /// Strings render as themselves, numbers and booleans as their JSON text,
    /// null as the empty string, lists and objects as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            DynamicValue::Null => String::new(),
            DynamicValue::String(s) => s.clone(),
            DynamicValue::Number(n) => n.to_string(),
            DynamicValue::Bool(b) => b.to_string(),
            DynamicValue::List(_) | DynamicValue::Object(_) => self.to_json().to_string(),
        }
    }

    /// Convert back into a `serde_json::Value`
    pub fn to_json(&self) -> Value {
        match self {
            DynamicValue::Null => Value::Null,
            DynamicValue::String(s) => Value::String(s.clone()),
            DynamicValue::Number(n) => Value::Number(n.clone()),
            DynamicValue::Bool(b) => Value::Bool(*b),
            DynamicValue::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            DynamicValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for DynamicValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => DynamicValue::Number(n),
            Value::String(s) => DynamicValue::String(s),
            Value::Array(items) => {
                DynamicValue::List(items.into_iter().map(DynamicValue::from).collect())
            }
            Value::Object(map) => DynamicValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, DynamicValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::String(s.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        DynamicValue::String(s)
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        DynamicValue::Bool(b)
    }
}

impl From<i64> for DynamicValue {
    fn from(n: i64) -> Self {
        DynamicValue::Number(n.into())
    }
}

// Any JSON value is accepted; there is no shape this can reject.
impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(DynamicValue::from)
    }
}

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_scalars() {
        assert_eq!(DynamicValue::from("abc").to_text(), "abc");
        assert_eq!(DynamicValue::from(3i64).to_text(), "3");
        assert_eq!(DynamicValue::from(json!(2.5)).to_text(), "2.5");
        assert_eq!(DynamicValue::from(true).to_text(), "true");
        assert_eq!(DynamicValue::Null.to_text(), "");
    }

    #[test]
    fn test_text_of_containers_is_compact_json() {
        let list = DynamicValue::from(json!(["a", 1, null]));
        assert_eq!(list.to_text(), r#"["a",1,null]"#);

        let object = DynamicValue::from(json!({"b": 2, "a": "x"}));
        assert_eq!(object.to_text(), r#"{"a":"x","b":2}"#);
    }

    #[test]
    fn test_deserialize_accepts_every_json_shape() {
        let values: Vec<DynamicValue> =
            serde_json::from_value(json!(["s", 1, 1.5, false, null, [1], {"k": "v"}])).unwrap();
        assert!(matches!(values[0], DynamicValue::String(_)));
        assert!(matches!(values[1], DynamicValue::Number(_)));
        assert!(matches!(values[2], DynamicValue::Number(_)));
        assert!(matches!(values[3], DynamicValue::Bool(false)));
        assert!(values[4].is_null());
        assert!(matches!(values[5], DynamicValue::List(_)));
        assert!(matches!(values[6], DynamicValue::Object(_)));
    }

    #[test]
    fn test_serialize_reproduces_wire_value() {
        let wire = json!({"tags": ["a", "b"], "count": 3, "ok": true, "gone": null});
        let value = DynamicValue::from(wire.clone());
        assert_eq!(serde_json::to_value(&value).unwrap(), wire);
    }
}
