use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct DocumentSummaryViewModel {
    pub source: String,
    /// `single` or `collection`
    pub kind: String,
    pub primary_count: usize,
    pub included_count: usize,
    pub primary_types: Vec<TypeCountViewModel>,
    pub included_types: Vec<TypeCountViewModel>,
    /// Relationship targets of primary resources that are not side-loaded
    pub unresolved_targets: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TypeCountViewModel {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct LinkViewModel {
    pub name: String,
    pub href: String,
}
