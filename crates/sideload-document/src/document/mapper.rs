use serde_json::Value;
use sideload_types::{Envelope, Relationships, Resource, ResourceIdentifier};

use super::schema::{RawDocument, RawResource, identity_text, json_kind};
use crate::{Error, Result};

/// Map a raw wire document onto the envelope model
///
/// `data` decides the envelope shape: object → single, array → collection.
pub(crate) fn map_document(raw: RawDocument) -> Result<Envelope> {
    let RawDocument {
        data,
        included,
        meta,
        links,
    } = raw;

    let data = data.ok_or(Error::MissingData)?;
    let included = map_included(included);

    match data {
        Value::Object(_) => {
            let data = map_primary(0, data);
            Ok(Envelope::Single {
                data,
                included,
                meta,
            })
        }
        Value::Array(items) => {
            let data = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| map_primary(index, item))
                .collect();
            Ok(Envelope::Collection {
                data,
                included,
                meta,
                links,
            })
        }
        other => Err(Error::InvalidData(json_kind(&other))),
    }
}

// Every RawResource field is lenient, so an object never fails to convert.
fn raw_resource(object: Value) -> RawResource {
    serde_json::from_value(object).unwrap_or_default()
}

/// Every element of `data` yields a resource, so counts survive a bad element
///
/// A missing or unusable `type`/`id` becomes an empty string and is logged
/// at `warn` with the element's position.
fn map_primary(index: usize, item: Value) -> Resource {
    let raw = match item {
        Value::Object(_) => raw_resource(item),
        other => {
            tracing::warn!(
                index,
                found = json_kind(&other),
                "primary resource at data[{}] is not an object",
                index
            );
            RawResource::default()
        }
    };

    let identifier = identity(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            index,
            %reason,
            "primary resource at data[{}] kept with an empty identity",
            index
        );
        partial_identity(&raw)
    });
    build_resource(identifier, raw)
}

/// Whatever identity text is usable, empty strings for the rest
fn partial_identity(raw: &RawResource) -> ResourceIdentifier {
    let text = |value: Option<&Value>| value.and_then(identity_text).unwrap_or_default();
    ResourceIdentifier::new(text(raw.resource_type.as_ref()), text(raw.id.as_ref()))
}

/// Side-loaded resources without an identity cannot be indexed and are dropped
fn map_included(raws: Vec<RawResource>) -> Vec<Resource> {
    raws.into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match identity(&raw) {
            Ok(identifier) => Some(build_resource(identifier, raw)),
            Err(reason) => {
                tracing::debug!(index, %reason, "dropping included resource");
                None
            }
        })
        .collect()
}

fn identity(raw: &RawResource) -> std::result::Result<ResourceIdentifier, String> {
    let resource_type = match raw.resource_type.as_ref() {
        None => return Err("has no 'type'".to_string()),
        Some(value) => identity_text(value)
            .ok_or_else(|| format!("has an unusable 'type' ({})", json_kind(value)))?,
    };
    let id = match raw.id.as_ref() {
        None => return Err("has no 'id'".to_string()),
        Some(value) => identity_text(value)
            .ok_or_else(|| format!("has an unusable 'id' ({})", json_kind(value)))?,
    };
    Ok(ResourceIdentifier::new(resource_type, id))
}

fn build_resource(identifier: ResourceIdentifier, raw: RawResource) -> Resource {
    let relationships: Relationships = raw
        .relationships
        .unwrap_or_default()
        .into_iter()
        .map(|(name, linkage)| (name, linkage.0))
        .collect();

    Resource::new(
        identifier,
        raw.attributes.unwrap_or_default(),
        relationships,
        raw.meta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Result<Envelope> {
        map_document(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_object_data_is_single() {
        let envelope = map(json!({"data": {"type": "widgets", "id": "1"}})).unwrap();
        assert!(envelope.is_single());
        assert_eq!(envelope.primary()[0].id(), "1");
        assert!(envelope.primary()[0].relationships().is_empty());
        assert!(envelope.primary()[0].attributes().is_empty());
    }

    #[test]
    fn test_array_data_is_collection() {
        let envelope = map(json!({"data": []})).unwrap();
        assert!(!envelope.is_single());
        assert!(envelope.primary().is_empty());
    }

    #[test]
    fn test_missing_data_is_an_error() {
        assert!(matches!(
            map(json!({"included": []})),
            Err(Error::MissingData)
        ));
    }

    #[test]
    fn test_null_data_is_an_error() {
        assert!(matches!(
            map(json!({"data": null})),
            Err(Error::InvalidData("null"))
        ));
    }

    #[test]
    fn test_primary_without_identity_is_kept() {
        let envelope = map(json!({"data": [
            {"type": "widgets", "id": "1"},
            {"type": "widgets", "id": null, "attributes": {"name": "Orphan"}},
            {"type": "widgets", "id": "3"}
        ]}))
        .unwrap();

        let ids: Vec<&str> = envelope.primary().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["1", "", "3"]);
        assert_eq!(envelope.primary()[1].resource_type(), "widgets");
        assert!(envelope.primary()[1].attributes().contains_key("name"));
    }

    #[test]
    fn test_non_object_primary_is_an_empty_resource() {
        let envelope = map(json!({"data": ["1", {"id": 7}]})).unwrap();
        assert_eq!(envelope.primary().len(), 2);
        assert_eq!(envelope.primary()[0].identifier(), &ResourceIdentifier::new("", ""));
        assert_eq!(envelope.primary()[1].identifier(), &ResourceIdentifier::new("", "7"));
    }

    #[test]
    fn test_included_without_identity_is_dropped() {
        let envelope = map(json!({
            "data": {"type": "widgets", "id": "1"},
            "included": [{"type": "users"}, {"type": "users", "id": "9"}, 7]
        }))
        .unwrap();
        assert_eq!(envelope.included().len(), 1);
        assert_eq!(envelope.included()[0].id(), "9");
    }

    #[test]
    fn test_collection_keeps_links_and_meta() {
        let envelope = map(json!({
            "data": [],
            "meta": {"record-count": 0},
            "links": {"next": "/v1/widgets?page[offset]=50"}
        }))
        .unwrap();
        assert!(envelope.meta().is_some());
        let Envelope::Collection { links, .. } = envelope else {
            panic!("expected a collection");
        };
        assert!(links.is_some_and(|links| links.contains_key("next")));
    }
}
