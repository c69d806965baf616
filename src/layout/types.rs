//! Layout plan types: anchors, statements, generation blocks.
//!
//! The layout passes produce these structures; the DOT renderer turns them
//! into text. Statements never reference raw output syntax, only anchors
//! and person ids.

use std::collections::HashSet;

// ─── Anchor ──────────────────────────────────────────────────────────────────

/// A node the layout can attach edges to: a person, a union marker, or one
/// slot of a children row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    Person(String),
    /// The invisible marker between the two parents of household `n`,
    /// named `h{n}`.
    Union(usize),
    /// Slot `i` of household `n`'s children row, named `h{n}_{i}`.
    Slot(usize, usize),
}

impl Anchor {
    /// Node name as it appears in the output graph.
    pub fn name(&self) -> String {
        match self {
            Anchor::Person(id) => id.clone(),
            Anchor::Union(h) => format!("h{h}"),
            Anchor::Slot(h, i) => format!("h{h}_{i}"),
        }
    }
}

// ─── LayoutStmt ──────────────────────────────────────────────────────────────

/// One layout directive inside a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutStmt {
    /// Invisible left-to-right ordering edge.
    Ordering { from: Anchor, to: Anchor },
    /// A couple joined through its union marker: `left -> h{n} -> right`.
    Union {
        left: String,
        household: usize,
        right: String,
    },
    /// Invisible node declaration for a union or slot anchor.
    AnchorDecl(Anchor),
    /// The chained children row of a household: `h{n}_0 -> ... -> h{n}_{len-1}`.
    SlotChain { household: usize, len: usize },
    /// Connector from a union marker down to the center slot of its row.
    CenterDrop { household: usize, slot: usize },
    /// Connector from a slot down to the child placed on it.
    KidDrop {
        household: usize,
        slot: usize,
        kid: String,
    },
}

// ─── GenerationBlock / TreeDoc ───────────────────────────────────────────────

/// Everything one generation contributes to the output: the couple rank,
/// the children-slot rank, and the loose connectors between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationBlock {
    pub couples: Vec<LayoutStmt>,
    pub slots: Vec<LayoutStmt>,
    pub connectors: Vec<LayoutStmt>,
}

impl GenerationBlock {
    pub fn is_empty(&self) -> bool {
        self.couples.is_empty() && self.slots.is_empty() && self.connectors.is_empty()
    }
}

/// A finished tree layout: generation blocks in emission order plus every
/// person encountered, first-seen order (drives the node-styling pass).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDoc {
    pub blocks: Vec<GenerationBlock>,
    pub people: Vec<String>,
}

// ─── RenderContext ───────────────────────────────────────────────────────────

/// The set of persons seen so far in one render invocation, in first-seen
/// order. Threaded explicitly through the ascending and descending walks so
/// a person styled by one walk is not styled again by the other.
#[derive(Debug, Default)]
pub struct RenderContext {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a person; returns true the first time an id is seen.
    pub fn mark(&mut self, id: &str) -> bool {
        if self.seen.insert(id.to_string()) {
            self.order.push(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn into_people(self) -> Vec<String> {
        self.order
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
