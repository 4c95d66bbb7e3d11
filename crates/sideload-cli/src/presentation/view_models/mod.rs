pub mod common;
pub mod document;
pub mod relationship;
pub mod resource;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use document::{DocumentSummaryViewModel, LinkViewModel, TypeCountViewModel};
pub use relationship::{LinkageStateViewModel, RelationshipResolutionViewModel};
pub use resource::{
    AttributeEntryViewModel, RawBagViewModel, RelationshipEntryViewModel, RelationshipViewModel,
    ResourceDetailViewModel, ResourceListViewModel, ResourceRowViewModel, TargetViewModel,
};
pub use result::CommandResultViewModel;
