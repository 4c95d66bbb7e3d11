use serde::Serialize;
use sideload_types::{Envelope, RelationshipLinkage, Resource, ResourceIdentifier, first_non_empty};

use crate::coerce::string_attr;
use crate::index::IncludedIndex;

/// Attribute names tried, in order, when labelling a related resource
pub const DEFAULT_DISPLAY_ATTRIBUTES: &[&str] = &["company-name", "name", "title"];

/// Ordered candidate attribute names for a related resource's display value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPreference(Vec<String>);

impl DisplayPreference {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(candidates.into_iter().map(Into::into).collect())
    }

    pub fn candidates(&self) -> &[String] {
        &self.0
    }

    /// First candidate whose value is non-empty after trimming, trimmed
    pub fn display_value(&self, resource: &Resource) -> String {
        self.0
            .iter()
            .map(|candidate| string_attr(resource.attributes(), candidate))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_ATTRIBUTES.iter().copied())
    }
}

/// A relationship target: always the identifier, plus a display value when side-loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    #[serde(flatten)]
    pub identifier: ResourceIdentifier,
    /// Empty when the target was not in `included`
    pub display: String,
}

impl Resolved {
    /// Display value, falling back to the id
    pub fn label(&self) -> String {
        first_non_empty(&[self.display.as_str(), self.identifier.id()])
    }

    pub fn is_resolved(&self) -> bool {
        !self.display.is_empty()
    }
}

/// Resolves relationship linkages against one envelope's included index
///
/// A target missing from the index is a soft miss: the identifier comes back
/// with an empty display value.
#[derive(Debug)]
pub struct Resolver<'a> {
    index: IncludedIndex<'a>,
    preference: DisplayPreference,
}

impl<'a> Resolver<'a> {
    pub fn new(index: IncludedIndex<'a>, preference: DisplayPreference) -> Self {
        Self { index, preference }
    }

    /// Index the envelope's `included` and resolve with `preference`
    pub fn for_envelope(envelope: &'a Envelope, preference: DisplayPreference) -> Self {
        Self::new(IncludedIndex::from_envelope(envelope), preference)
    }

    pub fn index(&self) -> &IncludedIndex<'a> {
        &self.index
    }

    pub fn preference(&self) -> &DisplayPreference {
        &self.preference
    }

    /// Resolve one identifier
    pub fn resolve_identifier(&self, identifier: &ResourceIdentifier) -> Resolved {
        let display = self
            .index
            .get(identifier)
            .map(|resource| self.preference.display_value(resource))
            .unwrap_or_default();
        Resolved {
            identifier: identifier.clone(),
            display,
        }
    }

    /// Resolve a to-one linkage; `None` for unset, null and to-many
    pub fn resolve(&self, linkage: &RelationshipLinkage) -> Option<Resolved> {
        linkage.one().map(|ident| self.resolve_identifier(ident))
    }

    /// Resolve every identifier of a linkage, whatever its cardinality
    pub fn resolve_many(&self, linkage: &RelationshipLinkage) -> Vec<Resolved> {
        linkage
            .identifiers()
            .iter()
            .map(|ident| self.resolve_identifier(ident))
            .collect()
    }

    /// Resolve the to-one relationship `name` of `resource`
    pub fn resolve_relationship(&self, resource: &Resource, name: &str) -> Option<Resolved> {
        self.resolve(resource.relationship(name))
    }

    /// Side-loaded resources behind a linkage, in linkage order, skipping misses
    pub fn related(&self, linkage: &RelationshipLinkage) -> Vec<&'a Resource> {
        linkage
            .identifiers()
            .iter()
            .filter_map(|ident| self.index.get(ident))
            .collect()
    }
}
