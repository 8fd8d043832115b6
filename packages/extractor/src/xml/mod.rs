//! XML utilities.

mod utils;

pub use utils::{find_child, find_descendants, get_tag_name, has_ancestor, has_tag, text_without};
