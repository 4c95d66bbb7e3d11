use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use sideload_types::{Attributes, RelationshipLinkage, ResourceIdentifier};
use std::collections::BTreeMap;

/// Top-level wire document
///
/// Everything except `data` is optional, and every nested container is read
/// leniently: a wrongly-shaped `included`, `attributes`, `relationships` or
/// `meta` degrades to empty instead of failing the whole body.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    /// `None` when the key is absent; `Some(Value::Null)` for `"data": null`
    ///
    /// Kept as raw JSON: the mapper decides single vs collection by shape.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_resource_list")]
    pub included: Vec<RawResource>,
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub meta: Option<Attributes>,
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub links: Option<Attributes>,
}

/// One resource object as found in `data` or `included`
///
/// Identity is kept as raw JSON so the mapper can tell "missing" from
/// "wrong type" when it reports an error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawResource {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub attributes: Option<Attributes>,
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub relationships: Option<BTreeMap<String, WireLinkage>>,
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub meta: Option<Attributes>,
}

/// Relationship wrapper (`{"data": ..., "links": ..., "meta": ...}`)
///
/// Only the inner `data` is kept, classified by shape. A wrapper that is not
/// an object, or an object without `data`, yields
/// [`RelationshipLinkage::Unset`].
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct WireLinkage(pub RelationshipLinkage);

impl<'de> Deserialize<'de> for WireLinkage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
        use std::fmt;

        struct WireLinkageVisitor;

        impl<'de> Visitor<'de> for WireLinkageVisitor {
            type Value = WireLinkage;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a relationship object or any value")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut linkage = RelationshipLinkage::Unset;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "data" => linkage = classify_linkage(map.next_value::<Value>()?),
                        _ => {
                            let _ = map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(WireLinkage(linkage))
            }

            // Anything that is not a wrapper object carries no linkage.
            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(WireLinkage::default())
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }

            fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }

            fn visit_i64<E>(self, _: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }

            fn visit_u64<E>(self, _: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }

            fn visit_f64<E>(self, _: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }

            fn visit_str<E>(self, _: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WireLinkage::default())
            }
        }

        deserializer.deserialize_any(WireLinkageVisitor)
    }
}

/// Classify the inner `data` of a relationship wrapper by JSON shape
///
/// `null` is a present-but-empty relationship, an object is to-one, an array
/// is to-many. An array is never narrowed to its first element.
pub(crate) fn classify_linkage(value: Value) -> RelationshipLinkage {
    match value {
        Value::Null => RelationshipLinkage::Null,
        Value::Object(_) => match identifier_from_value(&value) {
            Some(ident) => RelationshipLinkage::One(ident),
            None => {
                tracing::debug!(linkage = %value, "dropping to-one linkage without type/id");
                RelationshipLinkage::Unset
            }
        },
        Value::Array(items) => {
            let total = items.len();
            let idents: Vec<ResourceIdentifier> =
                items.iter().filter_map(identifier_from_value).collect();
            if idents.len() != total {
                tracing::debug!(
                    kept = idents.len(),
                    total,
                    "skipped to-many linkage elements without type/id"
                );
            }
            RelationshipLinkage::Many(idents)
        }
        other => {
            tracing::debug!(linkage = %other, "dropping linkage with unexpected shape");
            RelationshipLinkage::Unset
        }
    }
}

/// `{"type": "...", "id": "..."}` to an identifier; numeric ids are accepted as text
pub(crate) fn identifier_from_value(value: &Value) -> Option<ResourceIdentifier> {
    let object = value.as_object()?;
    let resource_type = identity_text(object.get("type")?)?;
    let id = identity_text(object.get("id")?)?;
    Some(ResourceIdentifier::new(resource_type, id))
}

/// Text of an identity field: non-empty string, or a number rendered as text
pub(crate) fn identity_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Object into `T`, anything else (or an object `T` rejects) into `None`
fn deserialize_object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Array of resource objects; non-object elements and non-array values are dropped
fn deserialize_resource_list<'de, D>(deserializer: D) -> Result<Vec<RawResource>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::debug!(found = %json_kind(&other), "ignoring non-array 'included'");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).ok(),
            _ => None,
        })
        .collect())
}

/// Short name of a JSON value's kind, for messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
