//! famdot — family tree descriptions to GraphViz DOT layout.
//!
//! Reads a flat description of persons, parent/child links and marriages
//! (legacy indented text or JSON), builds the relationship registry, and
//! emits a rank-constrained DOT graph that draws as a conventional family
//! tree: generations on horizontal ranks, spouses adjacent, children
//! centered below their parents' union.
//!
//! Public API: [`generate`] for one-call use, [`render_family`] for callers
//! that already hold a loaded [`model::Family`].

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod parsers;
pub mod render;

pub use config::{RenderOptions, TreeKind};
pub use error::{Error, Result};
pub use parsers::InputFormat;

use model::Family;
use render::{DotRenderer, Renderer};

/// Load a family description and render its tree to DOT text.
pub fn generate(src: &str, format: InputFormat, options: &RenderOptions) -> Result<String> {
    let family = parsers::load(src, format)?;
    render_family(&family, options)
}

/// Render the tree of an already-loaded family.
///
/// The starting persons come from the ancestor query; without one, the
/// first person found without recorded parents is used (an arbitrary pick
/// when several exist).
pub fn render_family(family: &Family, options: &RenderOptions) -> Result<String> {
    let roots = match options.ancestor.as_deref() {
        Some(query) => family.find_person(query)?,
        None => {
            let id = family.first_ancestor().ok_or(Error::NoStartingPerson)?;
            vec![id.to_string()]
        }
    };
    let doc = layout::layout_tree(family, &roots, options.tree)?;
    Ok(DotRenderer.render(family, &doc))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
