use serde::Serialize;

use super::resource::TargetViewModel;

/// How the relationship appeared on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkageStateViewModel {
    Unset,
    Null,
    ToOne,
    ToMany,
}

#[derive(Debug, Serialize)]
pub struct RelationshipResolutionViewModel {
    /// `type/id` of the resource the relationship belongs to
    pub resource: String,
    pub relationship: String,
    pub state: LinkageStateViewModel,
    pub targets: Vec<TargetViewModel>,
}
