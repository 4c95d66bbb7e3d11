use serde::Serialize;
use serde_json::Value;
use sideload_types::first_non_empty;
use std::collections::BTreeMap;

/// One relationship target, side-loaded or not
#[derive(Debug, Clone, Serialize)]
pub struct TargetViewModel {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    /// Empty when the target is not in `included`
    pub display: String,
}

impl TargetViewModel {
    pub fn label(&self) -> String {
        first_non_empty(&[self.display.as_str(), self.id.as_str()])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RelationshipViewModel {
    pub to_many: bool,
    pub targets: Vec<TargetViewModel>,
}

impl RelationshipViewModel {
    /// Comma-separated target labels; empty for no target
    pub fn labels(&self) -> String {
        self.targets
            .iter()
            .map(TargetViewModel::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Serialize)]
pub struct ResourceRowViewModel {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: BTreeMap<String, String>,
    pub relationships: BTreeMap<String, RelationshipViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ResourceListViewModel {
    /// Primary resources in the document
    pub total: usize,
    pub relationship_columns: Vec<String>,
    pub attribute_columns: Vec<String>,
    pub rows: Vec<ResourceRowViewModel>,
    /// Maximum cell width for plain output
    #[serde(skip)]
    pub width: usize,
}

#[derive(Debug, Serialize)]
pub struct AttributeEntryViewModel {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct RelationshipEntryViewModel {
    pub name: String,
    #[serde(flatten)]
    pub relationship: RelationshipViewModel,
}

#[derive(Debug, Serialize)]
pub struct ResourceDetailViewModel {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: Vec<AttributeEntryViewModel>,
    pub relationships: Vec<RelationshipEntryViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Decoded bags passed through untouched for a sparse-fieldset request
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RawBagViewModel(pub Value);
