use crate::args::hints;
use crate::presentation::presenters::resource::target_view_model;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LinkageStateViewModel, RelationshipResolutionViewModel,
    StatusBadge,
};
use sideload_document::Resolver;
use sideload_types::{RelationshipLinkage, Resource};

pub fn present_relationship_resolution(
    source: &str,
    resource: &Resource,
    name: &str,
    resolver: &Resolver<'_>,
) -> CommandResultViewModel<RelationshipResolutionViewModel> {
    let linkage = resource.relationship(name);
    let state = match linkage {
        RelationshipLinkage::Unset => LinkageStateViewModel::Unset,
        RelationshipLinkage::Null => LinkageStateViewModel::Null,
        RelationshipLinkage::One(_) => LinkageStateViewModel::ToOne,
        RelationshipLinkage::Many(_) => LinkageStateViewModel::ToMany,
    };
    let targets = resolver
        .resolve_many(linkage)
        .into_iter()
        .map(target_view_model)
        .collect::<Vec<_>>();
    let total = targets.len();
    let unresolved = targets.iter().filter(|t| t.display.is_empty()).count();

    let content = RelationshipResolutionViewModel {
        resource: resource.identifier().to_string(),
        relationship: name.to_string(),
        state,
        targets,
    };
    let mut result = CommandResultViewModel::new(content);

    if state == LinkageStateViewModel::Unset {
        let available = resource
            .relationships()
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        let description = if available.is_empty() {
            format!("{} has no relationships", resource.identifier())
        } else {
            format!("Relationships on {}: {}", resource.identifier(), available.join(", "))
        };
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Relationship '{}' is not present",
                name
            )))
            .with_suggestion(
                Guidance::new(description)
                    .with_command(hints::fmt::show(source, &resource.identifier().key())),
            );
    } else {
        result = result.with_unresolved(unresolved, total);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideload_document::{DisplayPreference, decode_str};

    const BODY: &str = r#"{
        "data": {"type": "widgets", "id": "1", "relationships": {
            "owner": {"data": {"type": "users", "id": "9"}},
            "parent": {"data": null},
            "tags": {"data": [{"type": "tags", "id": "1"}, {"type": "tags", "id": "2"}]}
        }},
        "included": [{"type": "tags", "id": "2", "attributes": {"name": "blue"}}]
    }"#;

    #[test]
    fn test_to_one_soft_miss() {
        let envelope = decode_str(BODY).unwrap();
        let resolver = Resolver::for_envelope(&envelope, DisplayPreference::default());
        let result =
            present_relationship_resolution("-", &envelope.primary()[0], "owner", &resolver);

        assert_eq!(result.content.state, LinkageStateViewModel::ToOne);
        assert_eq!(result.content.targets.len(), 1);
        assert_eq!(result.content.targets[0].id, "9");
        assert_eq!(result.content.targets[0].display, "");
        assert_eq!(
            result.badge.map(|badge| badge.label),
            Some("1 of 1 target(s) not side-loaded".to_string())
        );
    }

    #[test]
    fn test_to_many_resolves_each_target() {
        let envelope = decode_str(BODY).unwrap();
        let resolver = Resolver::for_envelope(&envelope, DisplayPreference::default());
        let result =
            present_relationship_resolution("-", &envelope.primary()[0], "tags", &resolver);

        let displays: Vec<&str> = result
            .content
            .targets
            .iter()
            .map(|t| t.display.as_str())
            .collect();
        assert_eq!(result.content.state, LinkageStateViewModel::ToMany);
        assert_eq!(displays, vec!["", "blue"]);
    }

    #[test]
    fn test_unset_relationship_suggests_available() {
        let envelope = decode_str(BODY).unwrap();
        let resolver = Resolver::for_envelope(&envelope, DisplayPreference::default());
        let result = present_relationship_resolution(
            "in.json",
            &envelope.primary()[0],
            "history",
            &resolver,
        );

        assert_eq!(result.content.state, LinkageStateViewModel::Unset);
        assert!(result.content.targets.is_empty());
        assert_eq!(
            result.suggestions[0].description,
            "Relationships on widgets/1: owner, parent, tags"
        );
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("sideload show in.json --id 'widgets|1'")
        );
    }
}
