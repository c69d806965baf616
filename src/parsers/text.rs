//! Legacy line-oriented input format.
//!
//! Blocks are separated by blank lines. Non-indented lines inside a block
//! describe the two parents of a household; lines indented with four spaces
//! (or a tab) describe their children. Lines starting with `#` are comments.
//! Person lines use the descriptor grammar `Name` or
//! `Name (key=value, flag, ...)`.
//!
//! ```text
//! Louis XIV (M, birthday=1638)
//! Marie-Thérèse d'Autriche (F)
//!     Louis (M, posttitle=le Grand Dauphin)
//!
//! # second union
//! Louis XIV
//! Françoise de Maintenon (F)
//! ```

use std::mem;

use crate::error::Result;
use crate::model::{Family, HouseholdDraft, IdAllocator};

/// Parse the legacy text format into a family registry.
///
/// Drafts are registered at each blank line and once more at end of input;
/// households without exactly two parents are reported and dropped there,
/// and loading continues.
pub fn load(src: &str) -> Result<Family> {
    let mut family = Family::new();
    populate(&mut family, src);
    Ok(family)
}

/// Like [`load`] with an injected id allocator, for reproducible `unique`
/// suffixes.
pub fn load_with(src: &str, alloc: Box<dyn IdAllocator>) -> Result<Family> {
    let mut family = Family::with_allocator(alloc);
    populate(&mut family, src);
    Ok(family)
}

fn populate(family: &mut Family, src: &str) {
    let mut draft = HouseholdDraft::new();
    for line in src.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if !draft.is_empty() {
                family.add_household(mem::take(&mut draft));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        if let Some(kid) = child_line(line) {
            let id = family.add_person(kid);
            draft.kids.push(id);
        } else {
            let id = family.add_person(line);
            draft.parents.push(id);
        }
    }
    if !draft.is_empty() {
        family.add_household(draft);
    }
}

/// A child line is indented by four spaces or one tab.
fn child_line(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
