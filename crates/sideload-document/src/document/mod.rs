pub mod io;
mod mapper;
mod schema;

pub use self::io::{decode_collection, decode_document, decode_file, decode_single, decode_str};
