//! # ZoomMap Editor
//!
//! Transactional editing of collections and their swap pins.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: ZoomMapSettings (authoritative)      │
//! └─────────────────────────────────────────────┘
//!                     ↓ stage (deep copy)
//! ┌─────────────────────────────────────────────┐
//! │ CollectionEditor: EditSession<Collection>   │
//! │  - Mutations apply to the draft only        │
//! │  - Save: commit + persist once              │
//! │  - Cancel / delete: nothing written         │
//! └─────────────────────────────────────────────┘
//!                     ↓ open_child (borrows draft)
//! ┌─────────────────────────────────────────────┐
//! │ SwapPinEditor: NestedSession<SwapPinPreset> │
//! │  - Save promotes into the collection draft  │
//! │  - Link inputs backed by suggest index      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Working copy isolation**: nothing reaches the settings before save
//! 2. **One result per session**: commit, discard or delete fires exactly once;
//!    dropping an unfinished session reports a discard
//! 3. **One level at a time**: a nested commit only reaches its parent's draft
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zoommap_editor::{CollectionEditor, CollectionMutation, EditorOptions};
//! use zoommap_common::JsonFileSink;
//!
//! let sink = JsonFileSink::new("zoommap-settings.json");
//! let mut settings = sink.load()?;
//!
//! let (mut editor, result) =
//!     CollectionEditor::open_by_id(&mut settings, "forest", &sink, EditorOptions::default())?;
//! editor.apply(CollectionMutation::Rename { name: "Deep forest".into() })?;
//!
//! let outcome = editor.save();
//! assert!(outcome.result.updated);
//! ```

mod collection_editor;
mod errors;
pub mod inputs;
mod mutations;
mod options;
mod pin_sizes;
pub mod projection;
mod session;
mod signal;
mod stage;
mod swap_pin_editor;

pub use collection_editor::{CollectionEditor, SaveOutcome};
pub use errors::EditorError;
pub use mutations::{
    CollectionMutation, FavoriteEdit, MutationContext, MutationError, StickerEdit,
    SwapPinMutation,
};
pub use options::EditorOptions;
pub use pin_sizes::{PinSizeEditor, PinSizeOverrides, PinSizeRow};
pub use projection::ListView;
pub use session::{EditSession, NestedSession};
pub use signal::{EditResult, ResultReceiver, ResultSignal, SessionOutcome};
pub use stage::{CollectionDraft, Stage};
pub use swap_pin_editor::SwapPinEditor;
