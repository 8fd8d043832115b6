//! Keiho extractor - Convert Japanese legal codes into JSON article records.
//!
//! Two sources are supported: plain-text codes whose sections are separated
//! by blank lines, and e-Gov law XML. Both produce the same
//! [`Article`] records, written as a pretty-printed JSON array.
//!
//! # Example
//!
//! ```
//! use keiho_extractor::segment::segment;
//!
//! let articles = segment("第一条\u{3000}任期为五年。\n\n第二条\u{3000}总统由选举产生。");
//! assert_eq!(articles.len(), 2);
//! assert_eq!(articles[1].text, "总统由选举产生。");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Markup constants, patterns and path validation
//! - [`types`]: Core data types (Article, Mode, SectionKind)
//! - [`error`]: Error types and Result alias
//! - [`source`]: Input file reading
//! - [`segment`]: Plain-text segmenter
//! - [`text`]: Whitespace and caption normalization
//! - [`xml`]: XML utilities
//! - [`egov`]: e-Gov law XML extraction
//! - [`json`]: JSON output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod egov;
pub mod error;
pub mod json;
pub mod segment;
pub mod source;
pub mod text;
pub mod types;
pub mod xml;

// Re-export main functions
pub use egov::extract_articles;
pub use segment::segment;

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use types::{Article, Mode, SectionKind};
