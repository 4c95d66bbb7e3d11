//! # Presentation Layer
//!
//! Output is split the same way for every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contract; what `--format json` prints.
//! * `presenters/`: decoded documents and resolved relationships into view models.
//! * `views/`: `fmt::Display` for each view model; what `--format plain` prints.
//! * `renderers/`: JSON vs text, badges, tips.
//! * `formatters/`: small string helpers shared by the views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
