//! Sparse-fieldset pass-through.
//!
//! When the caller restricted the field selection, the server returns only
//! those fields, and typed row construction would fill the rest with zero
//! values. In that case the decoded bags are emitted as-is instead.

use serde_json::{Map, Value};
use sideload_types::{Envelope, Resource};
use std::collections::BTreeMap;

use crate::{Error, Result};

/// Requested field lists, per resource type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseFieldset {
    /// Fields given without a type; they apply to the primary type
    primary: Vec<String>,
    by_type: BTreeMap<String, Vec<String>>,
}

impl SparseFieldset {
    /// Parse `TYPE=a,b` or bare `a,b` arguments
    ///
    /// Repeating a type appends to its list. Blank arguments are ignored.
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let mut fieldset = Self::default();
        for spec in specs {
            let spec = spec.as_ref().trim();
            if spec.is_empty() {
                continue;
            }
            match spec.split_once('=') {
                Some((resource_type, fields)) => {
                    let resource_type = resource_type.trim();
                    if resource_type.is_empty() {
                        return Err(Error::Fieldset(format!(
                            "'{}' has no resource type before '='",
                            spec
                        )));
                    }
                    let fields = split_fields(spec, fields)?;
                    fieldset
                        .by_type
                        .entry(resource_type.to_string())
                        .or_default()
                        .extend(fields);
                }
                None => {
                    let fields = split_fields(spec, spec)?;
                    fieldset.primary.extend(fields);
                }
            }
        }
        Ok(fieldset)
    }

    pub fn is_requested(&self) -> bool {
        !self.primary.is_empty() || !self.by_type.is_empty()
    }

    /// Fields requested for `resource_type`, with untyped fields bound to `primary_type`
    pub fn fields_for(&self, resource_type: &str, primary_type: &str) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        if resource_type == primary_type {
            fields.extend(self.primary.iter().map(String::as_str));
        }
        if let Some(typed) = self.by_type.get(resource_type) {
            fields.extend(typed.iter().map(String::as_str));
        }
        fields
    }

    /// Query parameters a transport would send, as `(fields[type], a,b)` pairs
    pub fn to_query_pairs(&self, primary_type: &str) -> Vec<(String, String)> {
        let mut merged: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        if !self.primary.is_empty() {
            merged
                .entry(primary_type)
                .or_default()
                .extend(self.primary.iter().map(String::as_str));
        }
        for (resource_type, fields) in &self.by_type {
            merged
                .entry(resource_type.as_str())
                .or_default()
                .extend(fields.iter().map(String::as_str));
        }
        merged
            .into_iter()
            .map(|(resource_type, fields)| {
                (format!("fields[{}]", resource_type), fields.join(","))
            })
            .collect()
    }
}

fn split_fields(spec: &str, fields: &str) -> Result<Vec<String>> {
    let fields: Vec<String> = fields
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();
    if fields.is_empty() {
        return Err(Error::Fieldset(format!("'{}' names no fields", spec)));
    }
    Ok(fields)
}

/// Raw decoded bag of one resource
///
/// `id` and `type`, every attribute with its wire value, and every present
/// relationship as linkage JSON. Unset relationships are omitted.
pub fn raw_bag(resource: &Resource) -> Value {
    let mut bag = Map::new();
    for (name, value) in resource.attributes() {
        bag.insert(name.clone(), value.to_json());
    }
    for (name, linkage) in resource.relationships() {
        if let Some(linkage) = linkage.to_json() {
            bag.insert(name.clone(), linkage);
        }
    }
    // Identity last so an attribute can never shadow it.
    bag.insert("id".to_string(), Value::String(resource.id().to_string()));
    bag.insert(
        "type".to_string(),
        Value::String(resource.resource_type().to_string()),
    );
    Value::Object(bag)
}

/// Pass-through output for a restricted request, `None` when nothing was restricted
///
/// A single envelope yields one object, a collection yields an array.
pub fn sparse_output(envelope: &Envelope, fieldset: &SparseFieldset) -> Option<Value> {
    if !fieldset.is_requested() {
        return None;
    }
    let output = match envelope {
        Envelope::Single { data, .. } => raw_bag(data),
        Envelope::Collection { data, .. } => Value::Array(data.iter().map(raw_bag).collect()),
    };
    Some(output)
}
