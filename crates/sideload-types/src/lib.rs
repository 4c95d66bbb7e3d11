pub mod domain;
pub mod error;
pub mod format;

pub use domain::*;
pub use error::{Error, Result};
pub use format::*;
