use crate::args::hints;
use crate::presentation::view_models::{
    AttributeEntryViewModel, CommandResultViewModel, Guidance, RawBagViewModel,
    RelationshipEntryViewModel, RelationshipViewModel, ResourceDetailViewModel,
    ResourceListViewModel, ResourceRowViewModel, StatusBadge, TargetViewModel,
};
use crate::presentation::presenters::document::attributes_json;
use serde_json::Value;
use sideload_document::{RelationshipCell, Resolved, Resolver, ResourceRow, string_attr};
use sideload_types::{RelationshipLinkage, Resource};

pub fn present_resource_list(
    source: &str,
    rows: Vec<ResourceRow>,
    limit: Option<usize>,
    width: usize,
) -> CommandResultViewModel<ResourceListViewModel> {
    let total = rows.len();
    let shown: Vec<ResourceRow> = match limit {
        Some(limit) => rows.into_iter().take(limit).collect(),
        None => rows,
    };

    let mut relationship_columns: Vec<String> = Vec::new();
    let mut attribute_columns: Vec<String> = Vec::new();
    for row in &shown {
        for (name, _) in &row.relationships {
            if !relationship_columns.contains(name) {
                relationship_columns.push(name.clone());
            }
        }
        for (name, _) in &row.attributes {
            if !attribute_columns.contains(name) {
                attribute_columns.push(name.clone());
            }
        }
    }

    let rows: Vec<ResourceRowViewModel> = shown.into_iter().map(row_view_model).collect();
    let shown_count = rows.len();

    let content = ResourceListViewModel {
        total,
        relationship_columns,
        attribute_columns,
        rows,
        width,
    };

    let mut result = CommandResultViewModel::new(content);
    if shown_count < total {
        result = result
            .with_badge(StatusBadge::info(format!(
                "Showing {} of {} resources",
                shown_count, total
            )))
            .with_suggestion(
                Guidance::new("Show every row").with_command(hints::fmt::list_all(source)),
            );
    }
    result
}

fn row_view_model(row: ResourceRow) -> ResourceRowViewModel {
    ResourceRowViewModel {
        id: row.id,
        resource_type: row.resource_type,
        attributes: row.attributes.into_iter().collect(),
        relationships: row
            .relationships
            .into_iter()
            .map(|(name, cell)| (name, cell_view_model(cell)))
            .collect(),
    }
}

fn cell_view_model(cell: RelationshipCell) -> RelationshipViewModel {
    match cell {
        RelationshipCell::Empty => RelationshipViewModel {
            to_many: false,
            targets: Vec::new(),
        },
        RelationshipCell::One(resolved) => RelationshipViewModel {
            to_many: false,
            targets: vec![target_view_model(resolved)],
        },
        RelationshipCell::Many(resolved) => RelationshipViewModel {
            to_many: true,
            targets: resolved.into_iter().map(target_view_model).collect(),
        },
    }
}

pub(crate) fn target_view_model(resolved: Resolved) -> TargetViewModel {
    TargetViewModel {
        resource_type: resolved.identifier.resource_type().to_string(),
        id: resolved.identifier.id().to_string(),
        display: resolved.display,
    }
}

/// Detail view of one resource; to-many targets are all resolved
pub fn present_resource_detail(
    resource: &Resource,
    resolver: &Resolver<'_>,
) -> CommandResultViewModel<ResourceDetailViewModel> {
    let attributes = resource
        .attributes()
        .keys()
        .map(|name| AttributeEntryViewModel {
            name: name.clone(),
            value: string_attr(resource.attributes(), name),
        })
        .collect();

    let relationships = resource
        .relationships()
        .iter()
        .map(|(name, linkage)| RelationshipEntryViewModel {
            name: name.clone(),
            relationship: RelationshipViewModel {
                to_many: linkage.is_to_many(),
                targets: match linkage {
                    RelationshipLinkage::One(_) => resolver
                        .resolve(linkage)
                        .map(target_view_model)
                        .into_iter()
                        .collect(),
                    _ => resolver
                        .resolve_many(linkage)
                        .into_iter()
                        .map(target_view_model)
                        .collect(),
                },
            },
        })
        .collect();

    CommandResultViewModel::new(ResourceDetailViewModel {
        id: resource.id().to_string(),
        resource_type: resource.resource_type().to_string(),
        attributes,
        relationships,
        meta: resource.meta().map(attributes_json),
    })
}

pub fn present_raw_bags(bags: Value) -> CommandResultViewModel<RawBagViewModel> {
    CommandResultViewModel::new(RawBagViewModel(bags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideload_document::{DisplayPreference, build_rows, decode_str};

    const BODY: &str = r#"{
        "data": [
            {"type": "widgets", "id": "1", "attributes": {"name": "Sprocket"},
             "relationships": {"owner": {"data": {"type": "users", "id": "9"}}}},
            {"type": "widgets", "id": "2", "attributes": {"name": "Flange", "count": 2}},
            {"type": "widgets", "id": "3"}
        ],
        "included": [{"type": "users", "id": "9", "attributes": {"name": "Ada"}}]
    }"#;

    #[test]
    fn test_list_columns_are_union_in_first_seen_order() {
        let envelope = decode_str(BODY).unwrap();
        let resolver = Resolver::for_envelope(&envelope, DisplayPreference::default());
        let result = present_resource_list("-", build_rows(&envelope, &resolver), None, 40);

        assert_eq!(result.content.relationship_columns, vec!["owner"]);
        assert_eq!(result.content.attribute_columns, vec!["name", "count"]);
        assert!(result.badge.is_none());
        assert_eq!(
            result.content.rows[0].relationships["owner"].labels(),
            "Ada"
        );
    }

    #[test]
    fn test_list_limit_adds_badge_and_hint() {
        let envelope = decode_str(BODY).unwrap();
        let resolver = Resolver::for_envelope(&envelope, DisplayPreference::default());
        let rows = build_rows(&envelope, &resolver);
        let result = present_resource_list("in.json", rows, Some(1), 40);

        assert_eq!(result.content.total, 3);
        assert_eq!(result.content.rows.len(), 1);
        assert_eq!(
            result.badge.map(|badge| badge.label),
            Some("Showing 1 of 3 resources".to_string())
        );
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("sideload list in.json")
        );
    }

    #[test]
    fn test_detail_resolves_relationships() {
        let envelope = decode_str(BODY).unwrap();
        let resolver = Resolver::for_envelope(&envelope, DisplayPreference::default());
        let result = present_resource_detail(&envelope.primary()[0], &resolver);

        let detail = result.content;
        assert_eq!(detail.attributes[0].name, "name");
        assert_eq!(detail.attributes[0].value, "Sprocket");
        assert_eq!(detail.relationships[0].relationship.targets[0].display, "Ada");
        assert!(!detail.relationships[0].relationship.to_many);
    }
}
