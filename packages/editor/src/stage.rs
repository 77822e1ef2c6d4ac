//! # Staging
//!
//! How an authoritative entity produces an isolated working copy ("draft")
//! and how a draft is written back.
//!
//! Staging is an explicit structural copy over the entity's concrete fields:
//! absent optional containers come back present and empty, so mutation code
//! never has to check for them. Committing assigns scalars directly and
//! replaces containers with fresh copies, so the entity never shares data
//! with the draft afterwards.

use zoommap_model::{Collection, CollectionBindings, CollectionInclude, SwapPinPreset};

/// Entity that can be edited through a working copy
pub trait Stage {
    type Draft: Clone + std::fmt::Debug;

    /// Deep, independent copy with every optional container present
    fn stage(&self) -> Self::Draft;

    /// Write every editable field of `draft` back onto `self`
    ///
    /// All new values are built before the first assignment; a commit
    /// applies completely or not at all.
    fn commit_draft(&mut self, draft: &Self::Draft);

    /// Short label used in logs
    fn label(&self) -> String;
}

/// Working copy of a [`Collection`]
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDraft {
    pub name: String,
    pub bindings: CollectionBindings,
    pub include: CollectionInclude,
}

impl Stage for Collection {
    type Draft = CollectionDraft;

    fn stage(&self) -> CollectionDraft {
        let bindings = self
            .bindings
            .as_ref()
            .map(|b| CollectionBindings {
                base_paths: b.base_paths.clone(),
            })
            .unwrap_or_default();

        let include = self
            .include
            .as_ref()
            .map(|i| CollectionInclude {
                pin_keys: i.pin_keys.clone(),
                favorites: i.favorites.clone(),
                stickers: i.stickers.clone(),
                swap_pins: i.swap_pins.clone(),
            })
            .unwrap_or_default();

        CollectionDraft {
            name: self.name.clone(),
            bindings,
            include,
        }
    }

    fn commit_draft(&mut self, draft: &CollectionDraft) {
        let name = draft.name.clone();
        let bindings = draft.bindings.clone();
        let include = draft.include.clone();

        self.name = name;
        self.bindings = Some(bindings);
        self.include = Some(include);
    }

    fn label(&self) -> String {
        format!("collection:{}", self.id)
    }
}

impl Stage for SwapPinPreset {
    type Draft = SwapPinPreset;

    fn stage(&self) -> SwapPinPreset {
        SwapPinPreset {
            id: self.id.clone(),
            name: self.name.clone(),
            frames: self.frames.clone(),
            default_hud: self.default_hud,
            default_scale_like_sticker: self.default_scale_like_sticker,
            hover_popover: self.hover_popover,
        }
    }

    /// The id is identity, not an editable field; it is never written
    fn commit_draft(&mut self, draft: &SwapPinPreset) {
        let name = draft.name.clone();
        let frames = draft.frames.clone();

        self.name = name;
        self.frames = frames;
        self.default_hud = draft.default_hud;
        self.default_scale_like_sticker = draft.default_scale_like_sticker;
        self.hover_popover = draft.hover_popover;
    }

    fn label(&self) -> String {
        format!("swap-pin:{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoommap_model::SwapPinFrame;

    #[test]
    fn test_stage_defaults_missing_containers() {
        let collection = Collection::new("c1", "World");
        let draft = collection.stage();

        assert_eq!(draft.name, "World");
        assert!(draft.bindings.base_paths.is_empty());
        assert!(draft.include.pin_keys.is_empty());
        assert!(draft.include.swap_pins.is_empty());
    }

    #[test]
    fn test_commit_materializes_containers() {
        let mut collection = Collection::new("c1", "World");
        let mut draft = collection.stage();
        draft.bindings.base_paths.push("maps/world.png".to_string());

        collection.commit_draft(&draft);

        assert_eq!(collection.base_paths(), ["maps/world.png".to_string()]);
        assert_eq!(collection.include, Some(CollectionInclude::default()));
    }

    #[test]
    fn test_swap_pin_commit_keeps_id() {
        let mut preset = SwapPinPreset::new("swp-aaaaaa", "Door");
        let mut draft = preset.stage();
        draft.id = "swp-bbbbbb".to_string();
        draft.frames.push(SwapPinFrame::new("open"));
        draft.hover_popover = Some(true);

        preset.commit_draft(&draft);

        assert_eq!(preset.id, "swp-aaaaaa");
        assert_eq!(preset.frames.len(), 1);
        assert_eq!(preset.hover_popover, Some(true));
    }
}
