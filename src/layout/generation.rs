//! Per-generation layout: three passes over one rank of persons.
//!
//! Pass 1 lines the generation's couples up on one rank, joined through
//! invisible union markers. Pass 2 builds one chained row of invisible
//! slots per household with children, kept odd-length so a center slot
//! always exists. Pass 3 drops a connector from each union marker to its
//! center slot and from each slot to the child standing on it.

use crate::error::{Error, Result};
use crate::model::{Family, Person};

use super::types::{Anchor, GenerationBlock, LayoutStmt, RenderContext};

/// Lay out one generation. Persons the layout touches for the first time
/// (spouses, children) are recorded in the context.
///
/// A generation with no unions at all contributes nothing: its members were
/// already placed by their parents' slot rows.
pub fn layout_generation(
    family: &Family,
    generation: &[String],
    ctx: &mut RenderContext,
) -> Result<GenerationBlock> {
    let all_leaves = generation
        .iter()
        .all(|id| family.person(id).is_none_or(|p| p.households.is_empty()));
    if all_leaves {
        return Ok(GenerationBlock::default());
    }

    let mut block = GenerationBlock::default();
    couple_rank(family, generation, ctx, &mut block.couples)?;
    slot_rank(family, generation, &mut block.slots);
    connectors(family, generation, ctx, &mut block.connectors);
    Ok(block)
}

// ─── Pass 1: couple rank ─────────────────────────────────────────────────────

/// Target of the ordering edge leading into a person: the person, unless
/// they hold several unions, in which case their first union's spouse
/// stands on the outside.
fn ordering_target(family: &Family, p: &Person, id: &str) -> String {
    if p.households.len() <= 1 {
        return id.to_string();
    }
    p.households
        .first()
        .and_then(|&hid| family.household(hid))
        .map(|h| h.spouse_of(id).to_string())
        .unwrap_or_else(|| id.to_string())
}

fn couple_rank(
    family: &Family,
    generation: &[String],
    ctx: &mut RenderContext,
    out: &mut Vec<LayoutStmt>,
) -> Result<()> {
    let mut prev: Option<String> = None;
    for id in generation {
        let Some(p) = family.person(id) else {
            continue;
        };
        let count = p.households.len();

        if let Some(prev_id) = prev.take() {
            out.push(LayoutStmt::Ordering {
                from: Anchor::Person(prev_id),
                to: Anchor::Person(ordering_target(family, p, id)),
            });
        }

        if count == 0 {
            prev = Some(id.clone());
            continue;
        }
        if count > 2 {
            return Err(Error::TooManyUnions {
                name: p.name.clone(),
                count,
            });
        }

        // unions before the midpoint sit on the person's left, the rest on
        // the right; the person ends up centered among them
        let mid = count / 2;
        for (i, &hid) in p.households.iter().enumerate() {
            let Some(h) = family.household(hid) else {
                continue;
            };
            let spouse = h.spouse_of(id).to_string();
            ctx.mark(&spouse);
            if i < mid {
                out.push(LayoutStmt::Union {
                    left: spouse,
                    household: hid,
                    right: id.clone(),
                });
            } else {
                out.push(LayoutStmt::Union {
                    left: id.clone(),
                    household: hid,
                    right: spouse.clone(),
                });
                prev = Some(spouse);
            }
            out.push(LayoutStmt::AnchorDecl(Anchor::Union(hid)));
        }
    }
    Ok(())
}

// ─── Pass 2: children slot rank ──────────────────────────────────────────────

fn slot_rank(family: &Family, generation: &[String], out: &mut Vec<LayoutStmt>) {
    let mut prev: Option<Anchor> = None;
    for id in generation {
        let Some(p) = family.person(id) else {
            continue;
        };
        for &hid in &p.households {
            let Some(h) = family.household(hid) else {
                continue;
            };
            if h.kids.is_empty() {
                continue;
            }
            if let Some(prev_slot) = prev.take() {
                out.push(LayoutStmt::Ordering {
                    from: prev_slot,
                    to: Anchor::Slot(hid, 0),
                });
            }
            let mut len = h.kids.len();
            if len % 2 == 0 {
                // odd slot count keeps a single center slot
                len += 1;
            }
            out.push(LayoutStmt::SlotChain {
                household: hid,
                len,
            });
            for i in 0..len {
                out.push(LayoutStmt::AnchorDecl(Anchor::Slot(hid, i)));
            }
            prev = Some(Anchor::Slot(hid, len - 1));
        }
    }
}

// ─── Pass 3: connectors ──────────────────────────────────────────────────────

fn connectors(
    family: &Family,
    generation: &[String],
    ctx: &mut RenderContext,
    out: &mut Vec<LayoutStmt>,
) {
    for id in generation {
        let Some(p) = family.person(id) else {
            continue;
        };
        for &hid in &p.households {
            let Some(h) = family.household(hid) else {
                continue;
            };
            if h.kids.is_empty() {
                continue;
            }
            let n = h.kids.len();
            out.push(LayoutStmt::CenterDrop {
                household: hid,
                slot: n / 2,
            });
            let mut slot = 0;
            for kid in &h.kids {
                ctx.mark(kid);
                out.push(LayoutStmt::KidDrop {
                    household: hid,
                    slot,
                    kid: kid.clone(),
                });
                slot += 1;
                if n % 2 == 0 && slot == n / 2 {
                    // the center slot stays free when the count is even
                    slot += 1;
                }
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
