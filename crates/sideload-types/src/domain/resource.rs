use super::{DynamicValue, ResourceIdentifier};
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute bag of one resource, keyed by wire attribute name
pub type Attributes = BTreeMap<String, DynamicValue>;

/// Relationship linkages of one resource, keyed by relationship name
pub type Relationships = BTreeMap<String, RelationshipLinkage>;

static UNSET: RelationshipLinkage = RelationshipLinkage::Unset;

/// Linkage of a single relationship, classified from wire shape at decode time
///
/// The variant never changes after decode. In particular a to-many linkage
/// is never reachable through [`RelationshipLinkage::one`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelationshipLinkage {
    /// Relationship key absent, or its wrapper carried no usable `data`
    #[default]
    Unset,
    /// Relationship present with no current target (`"data": null`)
    Null,
    /// To-one (`"data": {"type": ..., "id": ...}`)
    One(ResourceIdentifier),
    /// To-many (`"data": [...]`), possibly empty
    Many(Vec<ResourceIdentifier>),
}

impl RelationshipLinkage {
    /// Single identifier if, and only if, this is a to-one linkage
    pub fn one(&self) -> Option<&ResourceIdentifier> {
        match self {
            RelationshipLinkage::One(ident) => Some(ident),
            _ => None,
        }
    }

    /// Identifiers regardless of cardinality
    ///
    /// To-one yields a single element; unset and null yield none.
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            RelationshipLinkage::One(ident) => std::slice::from_ref(ident),
            RelationshipLinkage::Many(idents) => idents,
            RelationshipLinkage::Unset | RelationshipLinkage::Null => &[],
        }
    }

    /// Ids of [`Self::identifiers`]
    pub fn ids(&self) -> Vec<&str> {
        self.identifiers()
            .iter()
            .map(ResourceIdentifier::id)
            .collect()
    }

    /// Whether the relationship key was present on the wire
    pub fn is_present(&self) -> bool {
        !matches!(self, RelationshipLinkage::Unset)
    }

    pub fn is_to_many(&self) -> bool {
        matches!(self, RelationshipLinkage::Many(_))
    }

    /// Linkage in wire form, `None` when unset
    pub fn to_json(&self) -> Option<Value> {
        match self {
            RelationshipLinkage::Unset => None,
            RelationshipLinkage::Null => Some(Value::Null),
            RelationshipLinkage::One(ident) => Some(identifier_json(ident)),
            RelationshipLinkage::Many(idents) => {
                Some(Value::Array(idents.iter().map(identifier_json).collect()))
            }
        }
    }
}

fn identifier_json(ident: &ResourceIdentifier) -> Value {
    serde_json::json!({"type": ident.resource_type(), "id": ident.id()})
}

/// One decoded resource: identity, attribute bag, linkages and optional meta
///
/// Immutable once decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    identifier: ResourceIdentifier,
    attributes: Attributes,
    relationships: Relationships,
    meta: Option<Attributes>,
}

impl Resource {
    pub fn new(
        identifier: ResourceIdentifier,
        attributes: Attributes,
        relationships: Relationships,
        meta: Option<Attributes>,
    ) -> Self {
        Self {
            identifier,
            attributes,
            relationships,
            meta,
        }
    }

    pub fn identifier(&self) -> &ResourceIdentifier {
        &self.identifier
    }

    pub fn id(&self) -> &str {
        self.identifier.id()
    }

    pub fn resource_type(&self) -> &str {
        self.identifier.resource_type()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Linkage for `name`; [`RelationshipLinkage::Unset`] when the key was absent
    pub fn relationship(&self, name: &str) -> &RelationshipLinkage {
        self.relationships.get(name).unwrap_or(&UNSET)
    }

    pub fn meta(&self) -> Option<&Attributes> {
        self.meta.as_ref()
    }
}
