//! `fmt::Display` implementations for the view models, one file per screen.

mod detail;
mod document;
mod relationship;
mod table;
