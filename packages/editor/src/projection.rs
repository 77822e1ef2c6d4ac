//! # List Projections
//!
//! Rows shown for each editable list, recomputed from the draft after every
//! mutation. Row indices are only valid until the next mutation; callers
//! rebuild the projection instead of holding on to them.

use crate::stage::CollectionDraft;
use zoommap_common::{image_source, IconLibrary, ImageStore};
use zoommap_model::{MarkerPreset, StickerPreset, SwapPinPreset};

pub const NO_BASE_IMAGES: &str = "No base images bound.";
pub const NO_ICONS: &str = "No icons in library yet.";
pub const NO_FAVORITES: &str = "No favorites in this collection.";
pub const NO_STICKERS: &str = "No stickers in this collection.";
pub const NO_SWAP_PINS: &str = "No swap pins in this collection.";
pub const NO_FRAMES: &str = "No frames yet.";

/// Rows of one list plus the message shown when there are none
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R> {
    pub rows: Vec<R>,
    pub empty_message: Option<&'static str>,
}

impl<R> ListView<R> {
    fn new(rows: Vec<R>, empty: &'static str) -> Self {
        let empty_message = rows.is_empty().then_some(empty);
        Self { rows, empty_message }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasePathRow<'a> {
    pub index: usize,
    pub path: &'a str,
}

/// One checkbox in the icon library grid
#[derive(Debug, Clone, PartialEq)]
pub struct PinCell<'a> {
    pub key: &'a str,
    pub checked: bool,
    pub image_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteRow<'a> {
    pub index: usize,
    pub preset: &'a MarkerPreset,
    /// Selected option; blank is "(default)"
    pub icon_choice: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StickerRow<'a> {
    pub index: usize,
    pub preset: &'a StickerPreset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapPinRow<'a> {
    pub index: usize,
    pub id: &'a str,
    pub name: &'a str,
    pub frame_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow<'a> {
    pub index: usize,
    pub icon_key: &'a str,
    pub link: &'a str,
    /// False when the stored key has left the library
    pub icon_known: bool,
}

pub fn base_paths(draft: &CollectionDraft) -> ListView<BasePathRow<'_>> {
    let rows = draft
        .bindings
        .base_paths
        .iter()
        .enumerate()
        .map(|(index, path)| BasePathRow { index, path })
        .collect();
    ListView::new(rows, NO_BASE_IMAGES)
}

/// Library grid in library order, checked by membership in the draft
pub fn pin_cells<'a>(
    draft: &CollectionDraft,
    icons: IconLibrary<'a>,
    store: &dyn ImageStore,
) -> ListView<PinCell<'a>> {
    let rows = icons
        .entries()
        .iter()
        .map(|entry| PinCell {
            key: &entry.key,
            checked: draft.include.pin_keys.contains(&entry.key),
            image_src: image_source(store, &entry.path_or_data_url),
        })
        .collect();
    ListView::new(rows, NO_ICONS)
}

pub fn favorites(draft: &CollectionDraft) -> ListView<FavoriteRow<'_>> {
    let rows = draft
        .include
        .favorites
        .iter()
        .enumerate()
        .map(|(index, preset)| FavoriteRow {
            index,
            preset,
            icon_choice: preset.icon_key.as_deref().unwrap_or(""),
        })
        .collect();
    ListView::new(rows, NO_FAVORITES)
}

pub fn stickers(draft: &CollectionDraft) -> ListView<StickerRow<'_>> {
    let rows = draft
        .include
        .stickers
        .iter()
        .enumerate()
        .map(|(index, preset)| StickerRow { index, preset })
        .collect();
    ListView::new(rows, NO_STICKERS)
}

pub fn swap_pins(draft: &CollectionDraft) -> ListView<SwapPinRow<'_>> {
    let rows = draft
        .include
        .swap_pins
        .iter()
        .enumerate()
        .map(|(index, pin)| SwapPinRow {
            index,
            id: &pin.id,
            name: &pin.name,
            frame_count: pin.frames.len(),
        })
        .collect();
    ListView::new(rows, NO_SWAP_PINS)
}

pub fn frames<'a>(draft: &'a SwapPinPreset, icons: &IconLibrary<'_>) -> ListView<FrameRow<'a>> {
    let rows = draft
        .frames
        .iter()
        .enumerate()
        .map(|(index, frame)| FrameRow {
            index,
            icon_key: &frame.icon_key,
            link: frame.link.as_deref().unwrap_or(""),
            icon_known: icons.contains(&frame.icon_key),
        })
        .collect();
    ListView::new(rows, NO_FRAMES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use zoommap_common::MemoryImageStore;
    use zoommap_model::{Collection, IconEntry, SwapPinFrame};

    #[test]
    fn test_empty_lists_carry_messages() {
        let draft = Collection::new("c1", "X").stage();

        assert_eq!(base_paths(&draft).empty_message, Some(NO_BASE_IMAGES));
        assert_eq!(favorites(&draft).empty_message, Some(NO_FAVORITES));
        assert_eq!(stickers(&draft).empty_message, Some(NO_STICKERS));
        assert_eq!(swap_pins(&draft).empty_message, Some(NO_SWAP_PINS));

        let store = MemoryImageStore::new();
        assert_eq!(
            pin_cells(&draft, IconLibrary::new(&[]), &store).empty_message,
            Some(NO_ICONS)
        );
    }

    #[test]
    fn test_rows_are_reindexed_after_removal() {
        let mut draft = Collection::new("c1", "X").stage();
        draft.bindings.base_paths = vec!["a.png".into(), "b.png".into(), "c.png".into()];
        draft.bindings.base_paths.remove(0);

        let view = base_paths(&draft);
        assert_eq!(view.empty_message, None);
        assert_eq!(
            view.rows,
            vec![
                BasePathRow { index: 0, path: "b.png" },
                BasePathRow { index: 1, path: "c.png" },
            ]
        );
    }

    #[test]
    fn test_pin_cells_reflect_membership() {
        let mut draft = Collection::new("c1", "X").stage();
        draft.include.pin_keys.push("door".to_string());

        let entries = vec![
            IconEntry::new("pin", "icons/pin.svg"),
            IconEntry::new("door", "data:image/svg+xml;base64,AAAA"),
        ];
        let mut store = MemoryImageStore::new();
        store.add_file("icons/pin.svg");

        let view = pin_cells(&draft, IconLibrary::new(&entries), &store);
        assert!(!view.rows[0].checked);
        assert_eq!(view.rows[0].image_src.as_deref(), Some("app://local/icons/pin.svg"));
        assert!(view.rows[1].checked);
        assert_eq!(
            view.rows[1].image_src.as_deref(),
            Some("data:image/svg+xml;base64,AAAA")
        );
    }

    #[test]
    fn test_frame_rows_flag_unknown_icons() {
        let mut preset = SwapPinPreset::new("swp-000001", "Door");
        preset.frames.push(SwapPinFrame::new("pin"));
        preset.frames.push(SwapPinFrame {
            icon_key: "retired".to_string(),
            link: Some("Intro#Setup".to_string()),
        });

        let entries = vec![IconEntry::new("pin", "icons/pin.svg")];
        let view = frames(&preset, &IconLibrary::new(&entries));

        assert!(view.rows[0].icon_known);
        assert_eq!(view.rows[0].link, "");
        assert!(!view.rows[1].icon_known);
        assert_eq!(view.rows[1].link, "Intro#Setup");
    }
}
