// NOTE: sideload Architecture
//
// Why decode once into a generic graph (not per-type structs)?
// - The service exposes hundreds of resource types with no published schema
// - Attribute types drift between endpoints ("true" vs true, "3" vs 3)
// - A single tolerant decoder plus total accessors keeps every command alive
//   when one field changes shape
//
// Why classify relationships at decode time?
// - Cardinality is only knowable from wire shape (object vs array vs null)
// - Deciding once means no call site can read a to-many as a to-one
//
// Why read bodies from files/stdin?
// - Transport, auth and retries live elsewhere; this tool starts at the bytes

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod input;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, FieldsArgs, InputArgs, LogLevel, OutputFormat};
pub use commands::run;
