pub mod text;

pub use text::{attribute_value, cell, pad};
