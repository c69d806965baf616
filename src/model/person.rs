//! Person records, attribute values, and identity derivation.
//!
//! A person's registry id is its name stripped to `[0-9A-Za-z]`, unless an
//! explicit `id` attribute overrides it. The `unique` flag requests a
//! numeric suffix from the id allocator so same-named strangers stay apart.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ─── AttrValue ───────────────────────────────────────────────────────────────

/// An attribute value: free text (`sex=M`) or a bare flag (`unique`).
///
/// Untagged so JSON booleans and strings both deserialize into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Text(String),
}

impl AttrValue {
    /// The text payload, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Attribute map. Ordered so labels and exports come out deterministic.
pub type AttrMap = BTreeMap<String, AttrValue>;

// ─── Id allocation ───────────────────────────────────────────────────────────

/// Source of 3-digit suffixes for `unique`-flagged persons.
///
/// The default allocator is random; tests inject [`SequentialIds`] to keep
/// generated ids reproducible. `Debug` is a supertrait so registries holding
/// a boxed allocator stay debuggable.
pub trait IdAllocator: fmt::Debug {
    /// Next suffix in `100..=999`.
    fn suffix(&mut self) -> u32;
}

/// Random suffixes (the default).
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdAllocator for RandomIds {
    fn suffix(&mut self) -> u32 {
        let mut rng = rand::rng();
        rng.random_range(100u32..=999)
    }
}

/// Counting suffixes, wrapping back to 100 past 999.
#[derive(Debug)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn new(start: u32) -> Self {
        Self {
            next: start.clamp(100, 999),
        }
    }
}

impl IdAllocator for SequentialIds {
    fn suffix(&mut self) -> u32 {
        let n = self.next;
        self.next = if n >= 999 { 100 } else { n + 1 };
        n
    }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// One individual in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Descriptive attributes (sex, dates, places, titles, notes...).
    pub attrs: AttrMap,
    /// Household this person was born into, set when they appear as a kid
    /// of a registered household.
    pub parents: Option<usize>,
    /// Unions this person is a parent in, registration order.
    pub households: Vec<usize>,
    /// When false, traversal does not descend through this person.
    pub follow_kids: bool,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, attrs: AttrMap) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attrs,
            parents: None,
            households: Vec::new(),
            follow_kids: true,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ─── Descriptor grammar ──────────────────────────────────────────────────────

static ID_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9A-Za-z]").expect("valid id filter pattern"));

/// Strip every character outside `[0-9A-Za-z]` from a display name.
pub(crate) fn derive_id(name: &str) -> String {
    ID_FILTER.replace_all(name, "").into_owned()
}

/// Parse a person descriptor line: `Name` or `Name (key=value, flag, ...)`.
///
/// Tokens inside the parentheses are comma-separated; `key=value` becomes
/// text, a bare token becomes a true flag.
pub(crate) fn parse_descriptor(desc: &str) -> (String, AttrMap) {
    let desc = desc.trim();
    let mut attrs = AttrMap::new();

    let Some((head, rest)) = desc.split_once('(') else {
        return (desc.to_string(), attrs);
    };
    let Some((inner, _)) = rest.rsplit_once(')') else {
        return (desc.to_string(), attrs);
    };

    for token in inner.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.split_once('=') {
            Some((k, v)) => {
                attrs.insert(k.trim().to_string(), AttrValue::Text(v.trim().to_string()));
            }
            None => {
                attrs.insert(token.to_string(), AttrValue::Flag(true));
            }
        }
    }

    (head.trim().to_string(), attrs)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
