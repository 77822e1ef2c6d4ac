//! # ZoomMap Model
//!
//! Preset data shared by the editors: collections, the presets they include,
//! and the settings root that owns both the collections and the icon library.
//!
//! Stored data may omit any container; the editors default missing
//! containers when they stage a working copy, so the types here keep them
//! optional where the persisted shape allows absence.

pub mod collection;
pub mod id_generator;
pub mod settings;

pub use collection::*;
pub use id_generator::{is_swap_pin_id, new_swap_pin_id, SWAP_PIN_ID_PREFIX};
pub use settings::*;
