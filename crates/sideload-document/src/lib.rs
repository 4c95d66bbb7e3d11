// Error types
pub mod error;

// Wire schema, mapping and decode entry points
pub mod document;

// Attribute coercion
pub mod coerce;

// Included-resource index
pub mod index;

// Relationship resolution
pub mod resolve;

// Sparse-fieldset pass-through
pub mod sparse;

// Generic display rows
pub mod rows;

// Decoding
pub use document::{decode_collection, decode_document, decode_file, decode_single, decode_str};

// Coercion
pub use coerce::{
    AttributeAccess, bool_attr, float_attr, int_attr, raw_attr, string_attr, string_list_attr,
};

// Resolution
pub use index::IncludedIndex;
pub use resolve::{DEFAULT_DISPLAY_ATTRIBUTES, DisplayPreference, Resolved, Resolver};

// Pass-through and rows
pub use rows::{RelationshipCell, ResourceRow, build_row, build_rows};
pub use sparse::{SparseFieldset, raw_bag, sparse_output};

// Error types
pub use error::{Error, Result};
