//! Tree assembly: thread per-generation layouts into a full walk.
//!
//! The ascending walk starts one level above the starting persons and climbs
//! through [`Family::previous_generation`]; the descending walk starts at one
//! person and sinks through [`Family::next_generation`]. Both collect the
//! non-empty generation blocks in emission order and record every person they
//! pass in the shared render context.

use crate::error::Result;
use crate::model::Family;

use super::generation::layout_generation;
use super::types::{GenerationBlock, RenderContext};

/// Walk from the starting persons toward their forebears.
///
/// The first rendered generation is the union of the starting persons'
/// own parents; the starting persons themselves are only recorded for the
/// node-styling pass (the descending walk or the parents' child rows place
/// them).
pub fn ascending_blocks(
    family: &Family,
    roots: &[String],
    ctx: &mut RenderContext,
) -> Result<Vec<GenerationBlock>> {
    let mut generation: Vec<String> = Vec::new();
    for id in roots {
        ctx.mark(id);
        let birth = family
            .person(id)
            .and_then(|p| p.parents)
            .and_then(|hid| family.household(hid));
        if let Some(h) = birth {
            for parent in &h.parents {
                if !generation.contains(parent) {
                    generation.push(parent.clone());
                }
            }
        }
    }

    let mut blocks = Vec::new();
    while !generation.is_empty() {
        for id in &generation {
            ctx.mark(id);
        }
        let reps = couple_representatives(family, &generation);
        let block = layout_generation(family, &reps, ctx)?;
        if !block.is_empty() {
            blocks.push(block);
        }
        // climb from the full generation, not the deduplicated one
        generation = family.previous_generation(&generation);
    }
    Ok(blocks)
}

/// Walk from one starting person toward their descendants.
pub fn descending_blocks(
    family: &Family,
    root: &str,
    ctx: &mut RenderContext,
) -> Result<Vec<GenerationBlock>> {
    let mut generation = vec![root.to_string()];
    let mut blocks = Vec::new();
    while !generation.is_empty() {
        for id in &generation {
            ctx.mark(id);
        }
        let block = layout_generation(family, &generation, ctx)?;
        if !block.is_empty() {
            blocks.push(block);
        }
        generation = family.next_generation(&generation);
    }
    Ok(blocks)
}

/// Collapse a generation to one representative per couple: a person is
/// skipped when any already-chosen member shares a household with them, so
/// the couple is not rendered twice from each spouse's side.
fn couple_representatives(family: &Family, generation: &[String]) -> Vec<String> {
    let mut reps: Vec<String> = Vec::new();
    for id in generation {
        if reps.contains(id) {
            continue;
        }
        let Some(p) = family.person(id) else {
            continue;
        };
        let spouse_listed = p
            .households
            .iter()
            .filter_map(|&hid| family.household(hid))
            .any(|h| h.parents.iter().any(|parent| reps.contains(parent)));
        if !spouse_listed {
            reps.push(id.clone());
        }
    }
    reps
}

// ─── Tests ───────────────────────────────────────────────────────────────────
