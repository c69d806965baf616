//! Input loaders — pick the right format and build a linked [`Family`].
//!
//! Both loaders deliver a fully wired registry (households registered,
//! back-references set) so traversal can start right away.

pub mod json;
pub mod text;

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{Family, IdAllocator};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            // "old" is the historical name of the indented-text format
            "text" | "old" => Ok(InputFormat::Text),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse already-read source text in the given format.
pub fn load(src: &str, format: InputFormat) -> Result<Family> {
    match format {
        InputFormat::Json => json::load(src),
        InputFormat::Text => text::load(src),
    }
}

/// Like [`load`] with an injected id allocator, for reproducible `unique`
/// suffixes.
pub fn load_with(src: &str, format: InputFormat, alloc: Box<dyn IdAllocator>) -> Result<Family> {
    match format {
        InputFormat::Json => json::load_with(src, alloc),
        InputFormat::Text => text::load_with(src, alloc),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
