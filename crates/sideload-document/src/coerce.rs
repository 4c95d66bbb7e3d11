//! Total accessors over a resource's attribute bag.
//!
//! The same logical field is serialized inconsistently across endpoints (a
//! flag as `true` or `"true"`, an id as `3` or `"3"`). Every accessor here
//! accepts any shape and degrades to a zero value; none of them can fail.
//! Callers cannot tell "explicitly false/empty" from "missing" through these
//! accessors; use [`raw_attr`] when that distinction matters.

use sideload_types::{Attributes, DynamicValue, Resource};

/// String attribute; non-string values render as their default text, absent/null as `""`
///
/// Idempotent: coercing the result again yields the same string.
pub fn string_attr(attrs: &Attributes, key: &str) -> String {
    attrs
        .get(key)
        .map(DynamicValue::to_text)
        .unwrap_or_default()
}

/// Boolean attribute
///
/// `true`, or a string equal to `"true"` ignoring case and surrounding
/// whitespace. Everything else, including `"1"`, `"yes"` and absence, is
/// `false`.
pub fn bool_attr(attrs: &Attributes, key: &str) -> bool {
    match attrs.get(key) {
        Some(DynamicValue::Bool(value)) => *value,
        Some(DynamicValue::String(value)) => value.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// List attribute as strings; anything that is not a list yields an empty list
///
/// Non-string elements render as their default text, nulls as `""`.
pub fn string_list_attr(attrs: &Attributes, key: &str) -> Vec<String> {
    match attrs.get(key) {
        Some(DynamicValue::List(items)) => items.iter().map(DynamicValue::to_text).collect(),
        _ => Vec::new(),
    }
}

/// Integer attribute; numbers truncate toward zero, anything else is `0`
pub fn int_attr(attrs: &Attributes, key: &str) -> i64 {
    match attrs.get(key) {
        Some(DynamicValue::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        _ => 0,
    }
}

/// Float attribute; numbers convert, anything else is `0.0`
pub fn float_attr(attrs: &Attributes, key: &str) -> f64 {
    match attrs.get(key) {
        Some(DynamicValue::Number(n)) => n.as_f64().unwrap_or_default(),
        _ => 0.0,
    }
}

/// Raw attribute for pass-through output; `None` only when the key is absent
pub fn raw_attr<'a>(attrs: &'a Attributes, key: &str) -> Option<&'a DynamicValue> {
    attrs.get(key)
}

/// Coercion accessors as methods, for call sites holding a [`Resource`]
pub trait AttributeAccess {
    fn attrs(&self) -> &Attributes;

    fn string(&self, key: &str) -> String {
        string_attr(self.attrs(), key)
    }

    fn boolean(&self, key: &str) -> bool {
        bool_attr(self.attrs(), key)
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        string_list_attr(self.attrs(), key)
    }

    fn int(&self, key: &str) -> i64 {
        int_attr(self.attrs(), key)
    }

    fn float(&self, key: &str) -> f64 {
        float_attr(self.attrs(), key)
    }
}

impl AttributeAccess for Resource {
    fn attrs(&self) -> &Attributes {
        self.attributes()
    }
}

impl AttributeAccess for Attributes {
    fn attrs(&self) -> &Attributes {
        self
    }
}
