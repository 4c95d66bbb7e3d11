use serde::Serialize;
use sideload_types::{Envelope, RelationshipLinkage, Resource};

use crate::coerce::string_attr;
use crate::resolve::{Resolved, Resolver};

/// Rendered state of one relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelationshipCell {
    /// Unset or null
    Empty,
    One(Resolved),
    Many(Vec<Resolved>),
}

impl RelationshipCell {
    /// Cell text: the label of a to-one target, comma-joined labels for to-many
    pub fn label(&self) -> String {
        match self {
            RelationshipCell::Empty => String::new(),
            RelationshipCell::One(resolved) => resolved.label(),
            RelationshipCell::Many(resolved) => resolved
                .iter()
                .map(Resolved::label)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// One resource flattened for display
///
/// Attributes and relationships keep the decoded (name-sorted) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRow {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: Vec<(String, String)>,
    pub relationships: Vec<(String, RelationshipCell)>,
}

impl ResourceRow {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipCell> {
        self.relationships
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, cell)| cell)
    }
}

/// Build the generic row of one resource through the coercion layer and resolver
pub fn build_row(resource: &Resource, resolver: &Resolver<'_>) -> ResourceRow {
    let attributes = resource
        .attributes()
        .keys()
        .map(|name| (name.clone(), string_attr(resource.attributes(), name)))
        .collect();

    let relationships = resource
        .relationships()
        .iter()
        .map(|(name, linkage)| (name.clone(), cell(linkage, resolver)))
        .collect();

    ResourceRow {
        id: resource.id().to_string(),
        resource_type: resource.resource_type().to_string(),
        attributes,
        relationships,
    }
}

/// Rows for every primary resource of an envelope, in `data` order
pub fn build_rows(envelope: &Envelope, resolver: &Resolver<'_>) -> Vec<ResourceRow> {
    envelope
        .primary()
        .iter()
        .map(|resource| build_row(resource, resolver))
        .collect()
}

fn cell(linkage: &RelationshipLinkage, resolver: &Resolver<'_>) -> RelationshipCell {
    match linkage {
        RelationshipLinkage::Unset | RelationshipLinkage::Null => RelationshipCell::Empty,
        RelationshipLinkage::One(_) => resolver
            .resolve(linkage)
            .map_or(RelationshipCell::Empty, RelationshipCell::One),
        RelationshipLinkage::Many(_) => RelationshipCell::Many(resolver.resolve_many(linkage)),
    }
}
