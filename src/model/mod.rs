//! In-memory relationship model: persons, households, and the registry.

pub mod family;
pub mod household;
pub mod person;

pub use family::Family;
pub use household::{Household, HouseholdDraft};
pub use person::{AttrMap, AttrValue, IdAllocator, Person, RandomIds, SequentialIds};
