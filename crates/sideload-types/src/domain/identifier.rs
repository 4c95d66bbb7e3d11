use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used by [`ResourceIdentifier::key`] and [`ResourceIdentifier::parse_key`]
const KEY_SEPARATOR: char = '|';

/// The `(type, id)` pair naming a resource within one document
///
/// This is the only notion of identity in the resource graph: two
/// identifiers are equal iff both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    resource_type: String,
    id: String,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Resource type, e.g. `users`
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Flat lookup key in `type|id` form
    pub fn key(&self) -> String {
        format!("{}{}{}", self.resource_type, KEY_SEPARATOR, self.id)
    }

    /// Parse a `type|id` key back into an identifier
    ///
    /// Both halves are trimmed and must be non-empty.
    pub fn parse_key(raw: &str) -> Result<Self> {
        let (resource_type, id) = raw
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| Error::InvalidIdentifier(raw.to_string()))?;
        let resource_type = resource_type.trim();
        let id = id.trim();
        if resource_type.is_empty() || id.is_empty() {
            return Err(Error::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self::new(resource_type, id))
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_both_fields() {
        let a = ResourceIdentifier::new("users", "9");
        assert_eq!(a, ResourceIdentifier::new("users", "9"));
        assert_ne!(a, ResourceIdentifier::new("projects", "9"));
        assert_ne!(a, ResourceIdentifier::new("users", "10"));
    }

    #[test]
    fn test_key_round_trip() {
        let ident = ResourceIdentifier::new("material-types", "42");
        assert_eq!(ident.key(), "material-types|42");
        assert_eq!(ResourceIdentifier::parse_key(&ident.key()).unwrap(), ident);
    }

    #[test]
    fn test_parse_key_trims_and_rejects_empty_halves() {
        let ident = ResourceIdentifier::parse_key(" users | 7 ").unwrap();
        assert_eq!(ident.resource_type(), "users");
        assert_eq!(ident.id(), "7");

        assert!(ResourceIdentifier::parse_key("users").is_err());
        assert!(ResourceIdentifier::parse_key("|7").is_err());
        assert!(ResourceIdentifier::parse_key("users|").is_err());
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let json = serde_json::to_value(ResourceIdentifier::new("users", "9")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "users", "id": "9"}));
    }
}
