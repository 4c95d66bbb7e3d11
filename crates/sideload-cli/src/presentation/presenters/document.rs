use crate::args::hints;
use crate::presentation::view_models::{
    CommandResultViewModel, DocumentSummaryViewModel, Guidance, LinkViewModel, StatusBadge,
    TypeCountViewModel,
};
use serde_json::Value;
use sideload_document::{IncludedIndex, string_attr};
use sideload_types::{Attributes, Envelope, Resource};
use std::collections::{BTreeMap, BTreeSet};

pub fn present_document_summary(
    source: &str,
    envelope: &Envelope,
    index: &IncludedIndex<'_>,
) -> CommandResultViewModel<DocumentSummaryViewModel> {
    let unresolved_targets = envelope
        .primary()
        .iter()
        .flat_map(|resource| resource.relationships().values())
        .flat_map(|linkage| linkage.identifiers())
        .filter(|ident| !index.contains(ident))
        .collect::<BTreeSet<_>>()
        .len();

    let links = match envelope {
        Envelope::Collection {
            links: Some(links), ..
        } => links
            .keys()
            .map(|name| LinkViewModel {
                name: name.clone(),
                href: string_attr(links, name),
            })
            .collect(),
        _ => Vec::new(),
    };

    let content = DocumentSummaryViewModel {
        source: source.to_string(),
        kind: envelope.kind().to_string(),
        primary_count: envelope.primary().len(),
        included_count: envelope.included().len(),
        primary_types: type_counts(envelope.primary()),
        included_types: type_counts(envelope.included()),
        unresolved_targets,
        meta: envelope.meta().map(attributes_json),
        links,
    };

    let badge = StatusBadge::success(format!("Decoded {} document", envelope.kind()));
    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if let Some(first) = envelope.primary().first() {
        let key = first.identifier().key();
        if envelope.is_single() {
            result = result.with_suggestion(
                Guidance::new("Show the resource").with_command(hints::fmt::show(source, &key)),
            );
        } else {
            result = result.with_suggestion(
                Guidance::new("List every resource").with_command(hints::fmt::list_all(source)),
            );
        }
        if let Some(name) = first.relationships().keys().next() {
            result = result.with_suggestion(
                Guidance::new("Resolve a relationship")
                    .with_command(hints::fmt::resolve(source, &key, name)),
            );
        }
    }

    result
}

fn type_counts(resources: &[Resource]) -> Vec<TypeCountViewModel> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for resource in resources {
        *counts.entry(resource.resource_type()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(resource_type, count)| TypeCountViewModel {
            resource_type: resource_type.to_string(),
            count,
        })
        .collect()
}

pub(crate) fn attributes_json(attributes: &Attributes) -> Value {
    Value::Object(
        attributes
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect(),
    )
}
