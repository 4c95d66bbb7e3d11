use super::{Attributes, Resource};

/// One decoded response document
///
/// `data` was an object (`Single`) or an array (`Collection`). Constructed
/// fresh per response and dropped once the invocation that fetched it has
/// rendered its output.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Single {
        data: Resource,
        included: Vec<Resource>,
        /// Top-level `meta`, when the server sent one
        meta: Option<Attributes>,
    },
    Collection {
        data: Vec<Resource>,
        included: Vec<Resource>,
        meta: Option<Attributes>,
        /// Top-level `links` (pagination), when the server sent them
        links: Option<Attributes>,
    },
}

impl Envelope {
    /// Primary resources; a single envelope yields a one-element slice
    pub fn primary(&self) -> &[Resource] {
        match self {
            Envelope::Single { data, .. } => std::slice::from_ref(data),
            Envelope::Collection { data, .. } => data,
        }
    }

    /// Side-loaded resources
    pub fn included(&self) -> &[Resource] {
        match self {
            Envelope::Single { included, .. } | Envelope::Collection { included, .. } => included,
        }
    }

    pub fn meta(&self) -> Option<&Attributes> {
        match self {
            Envelope::Single { meta, .. } | Envelope::Collection { meta, .. } => meta.as_ref(),
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Envelope::Single { .. })
    }

    /// Envelope shape as a short label (`single` or `collection`)
    pub fn kind(&self) -> &'static str {
        match self {
            Envelope::Single { .. } => "single",
            Envelope::Collection { .. } => "collection",
        }
    }

    /// Find a primary resource by id, optionally constrained to a type
    pub fn find_primary(&self, resource_type: Option<&str>, id: &str) -> Option<&Resource> {
        self.primary().iter().find(|resource| {
            resource.id() == id && resource_type.is_none_or(|t| resource.resource_type() == t)
        })
    }
}
