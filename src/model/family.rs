//! The family registry: every person and every registered household.
//!
//! Persons are kept in an explicit insertion-order list next to the id map,
//! so lookups, exports, and the first-ancestor pick never depend on map
//! iteration order.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::error::{Error, Result};

use super::household::{Household, HouseholdDraft};
use super::person::{self, AttrValue, IdAllocator, Person, RandomIds};

/// Registry of persons and households.
///
/// Invariants: every registered household has exactly two parents, both
/// present in the registry; every person's `households` list indexes into
/// the household table.
#[derive(Debug)]
pub struct Family {
    /// Person ids in discovery order.
    order: Vec<String>,
    everybody: HashMap<String, Person>,
    households: Vec<Household>,
    alloc: Box<dyn IdAllocator>,
}

impl Default for Family {
    fn default() -> Self {
        Self::new()
    }
}

impl Family {
    pub fn new() -> Self {
        Self::with_allocator(Box::new(RandomIds))
    }

    /// Registry with an injected suffix allocator (tests use a sequential
    /// one so `unique` ids come out reproducible).
    pub fn with_allocator(alloc: Box<dyn IdAllocator>) -> Self {
        Self {
            order: Vec::new(),
            everybody: HashMap::new(),
            households: Vec::new(),
            alloc,
        }
    }

    // ─── Persons ─────────────────────────────────────────────────────────────

    /// Parse a descriptor and insert the person, or merge its attributes
    /// into the existing entry with the same id. Returns the canonical id.
    pub fn add_person(&mut self, desc: &str) -> String {
        let (name, mut attrs) = person::parse_descriptor(desc);
        let explicit = attrs.remove("id").and_then(|v| match v {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag(_) => None,
        });

        let id = match explicit {
            Some(id) => id,
            None => {
                let base = person::derive_id(&name);
                if attrs.contains_key("unique") {
                    self.fresh_unique_id(&base)
                } else {
                    base
                }
            }
        };

        match self.everybody.get_mut(&id) {
            Some(existing) => existing.attrs.extend(attrs),
            None => {
                self.order.push(id.clone());
                self.everybody
                    .insert(id.clone(), Person::new(id.clone(), name, attrs));
            }
        }
        id
    }

    /// Insert a pre-built person; an existing entry with the same id wins.
    pub fn insert_person(&mut self, person: Person) {
        if !self.everybody.contains_key(&person.id) {
            self.order.push(person.id.clone());
            self.everybody.insert(person.id.clone(), person);
        }
    }

    fn fresh_unique_id(&mut self, base: &str) -> String {
        let mut candidate = format!("{base}{}", self.alloc.suffix());
        // at most 900 distinct suffixes; stop retrying after a full sweep
        for _ in 0..900 {
            if !self.everybody.contains_key(&candidate) {
                break;
            }
            candidate = format!("{base}{}", self.alloc.suffix());
        }
        candidate
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.everybody.get(id)
    }

    /// Persons in discovery order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.order.iter().filter_map(|id| self.everybody.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Exclude (or re-include) a person's descendants from traversal.
    /// Returns false when the id is unknown.
    pub fn set_follow_kids(&mut self, id: &str, follow: bool) -> bool {
        match self.everybody.get_mut(id) {
            Some(p) => {
                p.follow_kids = follow;
                true
            }
            None => false,
        }
    }

    // ─── Households ──────────────────────────────────────────────────────────

    /// Validate and register a household draft.
    ///
    /// Drafts without exactly two registered parents are reported and
    /// dropped; the registry is left untouched and loading continues. On
    /// success the new id is linked into both parents' household lists and
    /// each kid's `parents` back-reference.
    pub fn add_household(&mut self, draft: HouseholdDraft) -> Option<usize> {
        let HouseholdDraft {
            parents,
            mut kids,
            attrs,
        } = draft;

        let parents: [String; 2] = match parents.try_into() {
            Ok(pair) => pair,
            Err(bad) => {
                warn!(
                    "household {:?} dropped: expected exactly 2 parents, got {}",
                    bad,
                    bad.len()
                );
                return None;
            }
        };
        if let Some(missing) = parents
            .iter()
            .find(|p| !self.everybody.contains_key(p.as_str()))
        {
            warn!("household dropped: parent \"{missing}\" is not registered");
            return None;
        }
        kids.retain(|kid| {
            let known = self.everybody.contains_key(kid);
            if !known {
                warn!("child \"{kid}\" is not registered, skipping");
            }
            known
        });

        let id = self.households.len();
        for parent in &parents {
            if let Some(p) = self.everybody.get_mut(parent) {
                if !p.households.contains(&id) {
                    p.households.push(id);
                }
            }
        }
        for kid in &kids {
            if let Some(p) = self.everybody.get_mut(kid) {
                p.parents = Some(id);
            }
        }

        self.households.push(Household {
            id,
            parents,
            kids,
            attrs,
        });
        Some(id)
    }

    pub fn household(&self, id: usize) -> Option<&Household> {
        self.households.get(id)
    }

    pub fn households(&self) -> &[Household] {
        &self.households
    }

    // ─── Lookup ──────────────────────────────────────────────────────────────

    /// Resolve a comma-separated list of ids/names to person ids,
    /// first-seen order, de-duplicated. Empty result is an error.
    pub fn find_person(&self, query: &str) -> Result<Vec<String>> {
        let mut found: Vec<String> = Vec::new();
        for token in query.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if self.everybody.contains_key(token) && !found.iter().any(|id| id == token) {
                found.push(token.to_string());
            }
            for id in &self.order {
                let by_name = self.everybody.get(id).is_some_and(|p| p.name == token);
                if by_name && !found.contains(id) {
                    found.push(id.clone());
                }
            }
        }
        if found.is_empty() {
            Err(Error::PersonNotFound(query.to_string()))
        } else {
            Ok(found)
        }
    }

    /// First person in discovery order with no recorded parents.
    ///
    /// Arbitrary when several candidates exist; callers that need a policy
    /// should look at [`ancestor_candidates`](Self::ancestor_candidates).
    pub fn first_ancestor(&self) -> Option<&str> {
        self.order
            .iter()
            .find(|id| {
                self.everybody
                    .get(id.as_str())
                    .is_some_and(|p| p.parents.is_none())
            })
            .map(String::as_str)
    }

    /// Every person with no recorded parents, discovery order.
    pub fn ancestor_candidates(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|id| {
                self.everybody
                    .get(id.as_str())
                    .is_some_and(|p| p.parents.is_none())
            })
            .map(String::as_str)
            .collect()
    }

    // ─── Generation traversal ────────────────────────────────────────────────

    /// One generation up: for each member's unions, both partners' own
    /// parents. First-seen order, de-duplicated.
    pub fn previous_generation(&self, generation: &[String]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out: Vec<String> = Vec::new();
        for id in generation {
            let Some(p) = self.everybody.get(id) else {
                continue;
            };
            if !p.follow_kids {
                continue;
            }
            for &hid in &p.households {
                let Some(h) = self.households.get(hid) else {
                    continue;
                };
                for side in &h.parents {
                    let Some(partner) = self.everybody.get(side) else {
                        continue;
                    };
                    let Some(birth) = partner.parents else {
                        continue;
                    };
                    let Some(birth_household) = self.households.get(birth) else {
                        continue;
                    };
                    for grand in &birth_household.parents {
                        if seen.insert(grand.as_str()) {
                            out.push(grand.clone());
                        }
                    }
                }
            }
        }
        out
    }

    /// One generation down: every kid of every union of every member.
    /// Each kid has one birth household, so no de-duplication is needed.
    pub fn next_generation(&self, generation: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for id in generation {
            let Some(p) = self.everybody.get(id) else {
                continue;
            };
            if !p.follow_kids {
                continue;
            }
            for &hid in &p.households {
                if let Some(h) = self.households.get(hid) {
                    out.extend(h.kids.iter().cloned());
                }
            }
        }
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
