use sideload_types::{Envelope, Resource, ResourceIdentifier};
use std::collections::HashMap;

/// `(type, id)` lookup over one envelope's side-loaded resources
///
/// Borrows from the envelope it was built from, so it can never outlive the
/// response. Holds only resources it was given.
#[derive(Debug, Default)]
pub struct IncludedIndex<'a> {
    by_identifier: HashMap<&'a ResourceIdentifier, &'a Resource>,
}

impl<'a> IncludedIndex<'a> {
    /// Build the index in a single pass
    ///
    /// When the same identifier is side-loaded twice, the last one wins.
    pub fn build(included: &'a [Resource]) -> Self {
        let mut by_identifier = HashMap::with_capacity(included.len());
        for resource in included {
            if by_identifier
                .insert(resource.identifier(), resource)
                .is_some()
            {
                tracing::trace!(resource = %resource.identifier(), "duplicate included resource");
            }
        }
        Self { by_identifier }
    }

    pub fn from_envelope(envelope: &'a Envelope) -> Self {
        Self::build(envelope.included())
    }

    pub fn get(&self, identifier: &ResourceIdentifier) -> Option<&'a Resource> {
        self.by_identifier.get(identifier).copied()
    }

    pub fn contains(&self, identifier: &ResourceIdentifier) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideload_types::{Attributes, DynamicValue, Relationships};

    fn user(id: &str, name: &str) -> Resource {
        let mut attributes = Attributes::new();
        attributes.insert("name".to_string(), DynamicValue::from(name));
        Resource::new(
            ResourceIdentifier::new("users", id),
            attributes,
            Relationships::new(),
            None,
        )
    }

    #[test]
    fn test_lookup_by_type_and_id() {
        let included = vec![user("9", "Ada"), user("10", "Grace")];
        let index = IncludedIndex::build(&included);

        assert_eq!(index.len(), 2);
        let ada = index.get(&ResourceIdentifier::new("users", "9")).unwrap();
        assert_eq!(ada.id(), "9");
        assert!(!index.contains(&ResourceIdentifier::new("projects", "9")));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let included = vec![user("9", "Old"), user("9", "New")];
        let index = IncludedIndex::build(&included);

        assert_eq!(index.len(), 1);
        let resource = index.get(&ResourceIdentifier::new("users", "9")).unwrap();
        assert_eq!(
            resource.attributes().get("name"),
            Some(&DynamicValue::from("New"))
        );
    }

    #[test]
    fn test_empty_index_never_fabricates() {
        let index = IncludedIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.get(&ResourceIdentifier::new("users", "9")).is_none());
    }
}
