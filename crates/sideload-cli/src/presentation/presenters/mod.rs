pub mod document;
pub mod relationship;
pub mod resource;

pub use document::present_document_summary;
pub use relationship::present_relationship_resolution;
pub use resource::{present_raw_bags, present_resource_detail, present_resource_list};
