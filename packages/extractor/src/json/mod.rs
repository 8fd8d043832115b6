//! JSON output for article records.

mod writer;

pub use writer::{generate_json, load_json, save_json, write_json};
