mod context;

pub mod inspect;
pub mod list;
pub mod resolve;
pub mod show;

pub use context::{HandlerContext, select_resource};
