//! Households: a union of exactly two persons, optionally with children.

use super::person::AttrMap;

// ─── HouseholdDraft ──────────────────────────────────────────────────────────

/// A household under construction by a loader.
///
/// Drafts collect person ids freely; validation happens when the draft is
/// registered with [`Family::add_household`](super::Family::add_household).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseholdDraft {
    pub parents: Vec<String>,
    pub kids: Vec<String>,
    pub attrs: AttrMap,
}

impl HouseholdDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was collected yet (blank-separated input blocks
    /// flush only non-empty drafts).
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.kids.is_empty()
    }
}

// ─── Household ───────────────────────────────────────────────────────────────

/// A registered union. Exactly two parents; parent order decides left/right
/// placement in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    /// Sequential id, 0-based registration order.
    pub id: usize,
    pub parents: [String; 2],
    /// Children in input order.
    pub kids: Vec<String>,
    pub attrs: AttrMap,
}

impl Household {
    /// The other parent of the union. Queries that match neither parent get
    /// the first one.
    pub fn spouse_of(&self, person: &str) -> &str {
        if self.parents[0] == person {
            &self.parents[1]
        } else {
            &self.parents[0]
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
