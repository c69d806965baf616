//! Render options consumed by the layout and rendering pipeline.

use std::str::FromStr;

use crate::error::Error;

// ─── TreeKind ────────────────────────────────────────────────────────────────

/// Which part of the tree to render, relative to the starting person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeKind {
    /// Forebears only.
    Ascending,
    /// Descendants only.
    Descending,
    #[default]
    Both,
}

impl TreeKind {
    pub fn wants_ascending(self) -> bool {
        matches!(self, TreeKind::Ascending | TreeKind::Both)
    }

    pub fn wants_descending(self) -> bool {
        matches!(self, TreeKind::Descending | TreeKind::Both)
    }
}

impl FromStr for TreeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" => Ok(TreeKind::Ascending),
            "descending" => Ok(TreeKind::Descending),
            "both" => Ok(TreeKind::Both),
            other => Err(Error::UnknownTreeKind(other.to_string())),
        }
    }
}

// ─── RenderOptions ───────────────────────────────────────────────────────────

/// Caller-supplied rendering parameters.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub tree: TreeKind,
    /// Comma-separated names/ids of the starting person(s). None picks the
    /// first person found without recorded parents.
    pub ancestor: Option<String>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
