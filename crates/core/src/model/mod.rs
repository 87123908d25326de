//! Entity and property model consumed by code generators
//!
//! Entities are assembled once by the schema parser and handed to
//! generators as plain data. Generators read names, properties and the
//! derived views; they never re-run identity detection or type inference.

mod entity;
mod icons;
mod property;

pub use entity::{DEFAULT_IDENTITY_NAME, Entity, EntitySummary, TYPE_DISCRIMINATOR_FIELD};
pub use icons::{FALLBACK_ICON, icon_for};
pub use property::{Property, SYNTHESIZED_IDENTITY_NAME};
