mod envelope;
mod identifier;
mod resource;
mod value;

pub use envelope::Envelope;
pub use identifier::ResourceIdentifier;
pub use resource::{Attributes, RelationshipLinkage, Relationships, Resource};
pub use value::DynamicValue;
