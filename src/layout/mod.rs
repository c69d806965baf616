//! Rank/anchor layout engine.
//!
//! Turns a [`Family`] and a set of starting persons into a [`TreeDoc`]: the
//! ordered generation blocks of an ascending and/or descending walk plus the
//! first-seen list of every person encountered. The DOT renderer consumes
//! the plan; nothing in here writes output syntax.

pub mod generation;
pub mod tree;
pub mod types;

pub use types::{Anchor, GenerationBlock, LayoutStmt, RenderContext, TreeDoc};

use crate::config::TreeKind;
use crate::error::Result;
use crate::model::Family;

/// Lay out the full tree for the given starting persons.
///
/// Ascending and descending walks share one render context, so a person
/// met by both is recorded (and later styled) only once. The descending
/// walk starts from the first starting person only.
pub fn layout_tree(family: &Family, roots: &[String], kind: TreeKind) -> Result<TreeDoc> {
    let mut ctx = RenderContext::new();
    let mut blocks = Vec::new();

    if kind.wants_ascending() {
        blocks.extend(tree::ascending_blocks(family, roots, &mut ctx)?);
    }
    if kind.wants_descending() {
        if let Some(root) = roots.first() {
            blocks.extend(tree::descending_blocks(family, root, &mut ctx)?);
        }
    }

    Ok(TreeDoc {
        blocks,
        people: ctx.into_people(),
    })
}
