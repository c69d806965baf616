//! JSON input format and round-trip export.
//!
//! The document is one object with two required keys:
//!
//! ```json
//! {
//!   "individuals": [{ "id": "LouisXIV", "name": "Louis XIV", "sex": "M" }],
//!   "households": [{ "parents": {"ID0": "LouisXIV", "ID1": "Marie"},
//!                    "children": {"ID0": "Louis"} }]
//! }
//! ```
//!
//! Extra keys on an individual become attributes; JSON booleans load as flag
//! attributes and export back as booleans, so loading an exported document
//! reproduces the registry.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{AttrMap, Family, HouseholdDraft, IdAllocator, Person};

// ─── Wire structs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct FamilyDoc {
    individuals: Vec<IndividualDoc>,
    households: Vec<HouseholdDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct IndividualDoc {
    id: String,
    name: String,
    #[serde(flatten)]
    attrs: AttrMap,
}

#[derive(Debug, Serialize, Deserialize)]
struct HouseholdDoc {
    #[serde(with = "members")]
    parents: Vec<String>,
    #[serde(with = "members")]
    children: Vec<String>,
}

/// Household member lists travel as `{"ID0": id, "ID1": id, ...}` objects.
/// Entries are ordered by the numeric key suffix, not lexically, so a row of
/// ten or more children keeps its input order.
mod members {
    use std::collections::HashMap;

    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ids: &[String], ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(ids.len()))?;
        for (i, id) in ids.iter().enumerate() {
            map.serialize_entry(&format!("ID{i}"), id)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let raw: HashMap<String, String> = HashMap::deserialize(de)?;
        let mut entries: Vec<(usize, String)> = raw
            .into_iter()
            .map(|(key, id)| {
                let index = key
                    .strip_prefix("ID")
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(usize::MAX);
                (index, id)
            })
            .collect();
        entries.sort();
        Ok(entries.into_iter().map(|(_, id)| id).collect())
    }
}

// ─── Load ────────────────────────────────────────────────────────────────────

/// Parse a JSON family document into a registry.
pub fn load(src: &str) -> Result<Family> {
    let mut family = Family::new();
    populate(&mut family, src)?;
    Ok(family)
}

/// Like [`load`] with an injected id allocator.
pub fn load_with(src: &str, alloc: Box<dyn IdAllocator>) -> Result<Family> {
    let mut family = Family::with_allocator(alloc);
    populate(&mut family, src)?;
    Ok(family)
}

fn populate(family: &mut Family, src: &str) -> Result<()> {
    let doc: FamilyDoc = serde_json::from_str(src)?;

    for ind in doc.individuals {
        family.insert_person(Person::new(ind.id, ind.name, ind.attrs));
    }

    for h in doc.households {
        // every reference must resolve before anything is wired
        for id in h.parents.iter().chain(h.children.iter()) {
            if family.person(id).is_none() {
                return Err(Error::UnknownPersonRef(id.clone()));
            }
        }
        family.add_household(HouseholdDraft {
            parents: h.parents,
            kids: h.children,
            attrs: AttrMap::new(),
        });
    }
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

/// Serialize a registry back to the JSON document shape, individuals in
/// discovery order and households in registration order.
pub fn export(family: &Family) -> Result<String> {
    let doc = FamilyDoc {
        individuals: family
            .people()
            .map(|p| IndividualDoc {
                id: p.id.clone(),
                name: p.name.clone(),
                attrs: p.attrs.clone(),
            })
            .collect(),
        households: family
            .households()
            .iter()
            .map(|h| HouseholdDoc {
                parents: h.parents.to_vec(),
                children: h.kids.clone(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
