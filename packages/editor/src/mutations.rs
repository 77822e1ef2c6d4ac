//! # Draft Mutations
//!
//! Every form interaction becomes one mutation applied to a working copy.
//!
//! ## Semantics
//!
//! - Adds to set-like lists (base paths, pin keys) are idempotent
//! - List removal is positional; a stale index is rejected, never clamped
//! - Text is trimmed; blank optional text clears the field
//! - Icon keys must come from the icon library (blank favorite key = default)
//! - Numeric input that does not parse leaves the field as it was

use crate::inputs;
use crate::options::EditorOptions;
use crate::stage::CollectionDraft;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use zoommap_common::IconLibrary;
use zoommap_model::{new_swap_pin_id, MarkerPreset, StickerPreset, SwapPinFrame, SwapPinPreset};

/// Edits to a collection working copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CollectionMutation {
    Rename { name: String },

    /// Bind a base image; no-op if already bound
    AddBasePath { path: String },

    RemoveBasePath { index: usize },

    /// Checkbox state of an icon library entry
    SetPinIncluded { key: String, included: bool },

    AddFavorite,

    UpdateFavorite { index: usize, edit: FavoriteEdit },

    RemoveFavorite { index: usize },

    AddSticker,

    UpdateSticker { index: usize, edit: StickerEdit },

    RemoveSticker { index: usize },

    /// Append a swap pin with a fresh id
    AddSwapPin,

    RenameSwapPin { index: usize, name: String },

    RemoveSwapPin { index: usize },
}

/// Field edits on one favorite row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FavoriteEdit {
    Name(String),
    /// Blank selects the default icon
    IconKey(String),
    Layer(String),
    OpenEditor(bool),
    LinkTemplate(String),
}

/// Field edits on one sticker row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StickerEdit {
    Name(String),
    ImagePath(String),
    /// Raw numeric input
    Size(String),
    Layer(String),
}

/// Edits to a swap pin working copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SwapPinMutation {
    /// Blank names are ignored
    Rename { name: String },

    SetDefaultHud(bool),

    SetScaleLikeSticker(bool),

    SetHoverPopover(bool),

    /// Append a frame showing the first library icon
    AddFrame,

    SetFrameIcon { index: usize, key: String },

    SetFrameLink { index: usize, link: String },

    RemoveFrame { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Index {index} out of range for {list} (len {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Icon not in library: {0}")]
    UnknownIcon(String),

    #[error("Icon library is empty")]
    EmptyIconLibrary,
}

/// Read-only context a mutation is validated against
#[derive(Debug, Clone, Copy)]
pub struct MutationContext<'a> {
    pub icons: IconLibrary<'a>,
    pub options: &'a EditorOptions,
}

fn check_index(list: &'static str, index: usize, len: usize) -> Result<(), MutationError> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfRange { list, index, len })
    }
}

fn check_icon(icons: &IconLibrary<'_>, key: &str) -> Result<(), MutationError> {
    if icons.contains(key) {
        Ok(())
    } else {
        Err(MutationError::UnknownIcon(key.to_string()))
    }
}

/// Toggle toggles store `Some(true)` or nothing
fn flag(on: bool) -> Option<bool> {
    on.then_some(true)
}

impl CollectionMutation {
    /// Apply to a draft with validation
    pub fn apply(&self, draft: &mut CollectionDraft, ctx: &MutationContext<'_>) -> Result<(), MutationError> {
        self.validate(draft, ctx)?;
        debug!(mutation = ?self, "Applying collection mutation");

        let include = &mut draft.include;
        match self {
            CollectionMutation::Rename { name } => {
                draft.name = inputs::text(name);
            }

            CollectionMutation::AddBasePath { path } => {
                let paths = &mut draft.bindings.base_paths;
                if !paths.iter().any(|p| p == path) {
                    paths.push(path.clone());
                }
            }

            CollectionMutation::RemoveBasePath { index } => {
                draft.bindings.base_paths.remove(*index);
            }

            CollectionMutation::SetPinIncluded { key, included } => {
                let keys = &mut include.pin_keys;
                let position = keys.iter().position(|k| k == key);
                match (*included, position) {
                    (true, None) => keys.push(key.clone()),
                    (false, Some(i)) => {
                        keys.remove(i);
                    }
                    _ => {}
                }
            }

            CollectionMutation::AddFavorite => {
                let name = format!("Favorite {}", include.favorites.len() + 1);
                include.favorites.push(MarkerPreset {
                    name,
                    ..MarkerPreset::default()
                });
            }

            CollectionMutation::UpdateFavorite { index, edit } => {
                let preset = &mut include.favorites[*index];
                match edit {
                    FavoriteEdit::Name(name) => preset.name = inputs::text(name),
                    FavoriteEdit::IconKey(key) => preset.icon_key = inputs::optional_text(key),
                    FavoriteEdit::Layer(layer) => preset.layer_name = inputs::optional_text(layer),
                    FavoriteEdit::OpenEditor(on) => preset.open_editor = *on,
                    FavoriteEdit::LinkTemplate(link) => {
                        preset.link_template = inputs::optional_text(link)
                    }
                }
            }

            CollectionMutation::RemoveFavorite { index } => {
                include.favorites.remove(*index);
            }

            CollectionMutation::AddSticker => {
                let name = format!("Sticker {}", include.stickers.len() + 1);
                include.stickers.push(StickerPreset {
                    name,
                    image_path: String::new(),
                    size: ctx.options.default_sticker_size,
                    layer_name: None,
                });
            }

            CollectionMutation::UpdateSticker { index, edit } => {
                let sticker = &mut include.stickers[*index];
                match edit {
                    StickerEdit::Name(name) => sticker.name = inputs::text(name),
                    StickerEdit::ImagePath(path) => sticker.image_path = inputs::text(path),
                    StickerEdit::Size(raw) => {
                        if let Some(size) = inputs::sticker_size(raw) {
                            sticker.size = size;
                        }
                    }
                    StickerEdit::Layer(layer) => sticker.layer_name = inputs::optional_text(layer),
                }
            }

            CollectionMutation::RemoveSticker { index } => {
                include.stickers.remove(*index);
            }

            CollectionMutation::AddSwapPin => {
                let swaps = &mut include.swap_pins;
                let id = new_swap_pin_id(|id| swaps.iter().any(|p| p.id == id));
                let name = format!("Swap pin {}", swaps.len() + 1);
                swaps.push(SwapPinPreset::new(id, name));
            }

            CollectionMutation::RenameSwapPin { index, name } => {
                include.swap_pins[*index].name = inputs::text(name);
            }

            CollectionMutation::RemoveSwapPin { index } => {
                include.swap_pins.remove(*index);
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, draft: &CollectionDraft, ctx: &MutationContext<'_>) -> Result<(), MutationError> {
        let include = &draft.include;
        match self {
            CollectionMutation::RemoveBasePath { index } => {
                check_index("base paths", *index, draft.bindings.base_paths.len())
            }

            CollectionMutation::SetPinIncluded { key, included } => {
                if *included {
                    check_icon(&ctx.icons, key)
                } else {
                    Ok(())
                }
            }

            CollectionMutation::UpdateFavorite { index, edit } => {
                check_index("favorites", *index, include.favorites.len())?;
                match edit {
                    FavoriteEdit::IconKey(key) if !key.trim().is_empty() => {
                        check_icon(&ctx.icons, key.trim())
                    }
                    _ => Ok(()),
                }
            }

            CollectionMutation::RemoveFavorite { index } => {
                check_index("favorites", *index, include.favorites.len())
            }

            CollectionMutation::UpdateSticker { index, .. }
            | CollectionMutation::RemoveSticker { index } => {
                check_index("stickers", *index, include.stickers.len())
            }

            CollectionMutation::RenameSwapPin { index, .. }
            | CollectionMutation::RemoveSwapPin { index } => {
                check_index("swap pins", *index, include.swap_pins.len())
            }

            CollectionMutation::Rename { .. }
            | CollectionMutation::AddBasePath { .. }
            | CollectionMutation::AddFavorite
            | CollectionMutation::AddSticker
            | CollectionMutation::AddSwapPin => Ok(()),
        }
    }
}

impl SwapPinMutation {
    /// Apply to a swap pin draft with validation
    pub fn apply(&self, draft: &mut SwapPinPreset, icons: &IconLibrary<'_>) -> Result<(), MutationError> {
        self.validate(draft, icons)?;
        debug!(mutation = ?self, swap_pin = %draft.id, "Applying swap pin mutation");

        match self {
            SwapPinMutation::Rename { name } => {
                if let Some(name) = inputs::optional_text(name) {
                    draft.name = name;
                }
            }

            SwapPinMutation::SetDefaultHud(on) => draft.default_hud = flag(*on),

            SwapPinMutation::SetScaleLikeSticker(on) => {
                draft.default_scale_like_sticker = flag(*on)
            }

            SwapPinMutation::SetHoverPopover(on) => draft.hover_popover = flag(*on),

            SwapPinMutation::AddFrame => {
                if let Some(key) = icons.first_key() {
                    draft.frames.push(SwapPinFrame::new(key));
                }
            }

            SwapPinMutation::SetFrameIcon { index, key } => {
                draft.frames[*index].icon_key = key.clone();
            }

            SwapPinMutation::SetFrameLink { index, link } => {
                draft.frames[*index].link = inputs::optional_text(link);
            }

            SwapPinMutation::RemoveFrame { index } => {
                draft.frames.remove(*index);
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, draft: &SwapPinPreset, icons: &IconLibrary<'_>) -> Result<(), MutationError> {
        match self {
            SwapPinMutation::AddFrame => {
                if icons.is_empty() {
                    Err(MutationError::EmptyIconLibrary)
                } else {
                    Ok(())
                }
            }

            SwapPinMutation::SetFrameIcon { index, key } => {
                check_index("frames", *index, draft.frames.len())?;
                check_icon(icons, key)
            }

            SwapPinMutation::SetFrameLink { index, .. } | SwapPinMutation::RemoveFrame { index } => {
                check_index("frames", *index, draft.frames.len())
            }

            SwapPinMutation::Rename { .. }
            | SwapPinMutation::SetDefaultHud(_)
            | SwapPinMutation::SetScaleLikeSticker(_)
            | SwapPinMutation::SetHoverPopover(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use zoommap_model::{is_swap_pin_id, Collection, IconEntry};

    fn icons() -> Vec<IconEntry> {
        vec![
            IconEntry::new("pin", "icons/pin.svg"),
            IconEntry::new("door", "icons/door.svg"),
        ]
    }

    fn apply_all(draft: &mut CollectionDraft, mutations: &[CollectionMutation]) {
        let entries = icons();
        let options = EditorOptions::default();
        let ctx = MutationContext {
            icons: IconLibrary::new(&entries),
            options: &options,
        };
        for m in mutations {
            m.apply(draft, &ctx).unwrap();
        }
    }

    #[test]
    fn test_add_base_path_is_idempotent() {
        let mut draft = Collection::new("c1", "X").stage();
        let add = CollectionMutation::AddBasePath {
            path: "a.png".to_string(),
        };
        apply_all(&mut draft, &[add.clone(), add]);

        assert_eq!(draft.bindings.base_paths, vec!["a.png"]);
    }

    #[test]
    fn test_pin_toggle_never_duplicates() {
        let mut draft = Collection::new("c1", "X").stage();
        let on = CollectionMutation::SetPinIncluded {
            key: "pin".to_string(),
            included: true,
        };
        let off = CollectionMutation::SetPinIncluded {
            key: "pin".to_string(),
            included: false,
        };
        apply_all(&mut draft, &[on.clone(), on, off.clone()]);
        assert!(draft.include.pin_keys.is_empty());

        apply_all(&mut draft, &[off]);
        assert!(draft.include.pin_keys.is_empty());
    }

    #[test]
    fn test_removal_shifts_later_rows() {
        let mut draft = Collection::new("c1", "X").stage();
        apply_all(
            &mut draft,
            &[
                CollectionMutation::AddFavorite,
                CollectionMutation::AddFavorite,
                CollectionMutation::AddFavorite,
                CollectionMutation::RemoveFavorite { index: 0 },
            ],
        );

        let names: Vec<&str> = draft.include.favorites.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Favorite 2", "Favorite 3"]);
    }

    #[test]
    fn test_stale_index_is_rejected() {
        let mut draft = Collection::new("c1", "X").stage();
        let entries = icons();
        let options = EditorOptions::default();
        let ctx = MutationContext {
            icons: IconLibrary::new(&entries),
            options: &options,
        };

        let err = CollectionMutation::RemoveSticker { index: 0 }
            .apply(&mut draft, &ctx)
            .unwrap_err();
        assert_eq!(
            err,
            MutationError::IndexOutOfRange {
                list: "stickers",
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn test_favorite_fields() {
        let mut draft = Collection::new("c1", "X").stage();
        apply_all(
            &mut draft,
            &[
                CollectionMutation::AddFavorite,
                CollectionMutation::UpdateFavorite {
                    index: 0,
                    edit: FavoriteEdit::IconKey("door".to_string()),
                },
                CollectionMutation::UpdateFavorite {
                    index: 0,
                    edit: FavoriteEdit::Layer("  ".to_string()),
                },
                CollectionMutation::UpdateFavorite {
                    index: 0,
                    edit: FavoriteEdit::LinkTemplate(" [[{{name}}]] ".to_string()),
                },
                CollectionMutation::UpdateFavorite {
                    index: 0,
                    edit: FavoriteEdit::OpenEditor(true),
                },
            ],
        );

        let favorite = &draft.include.favorites[0];
        assert_eq!(favorite.icon_key.as_deref(), Some("door"));
        assert_eq!(favorite.layer_name, None);
        assert_eq!(favorite.link_template.as_deref(), Some("[[{{name}}]]"));
        assert!(favorite.open_editor);

        apply_all(
            &mut draft,
            &[CollectionMutation::UpdateFavorite {
                index: 0,
                edit: FavoriteEdit::IconKey(String::new()),
            }],
        );
        assert_eq!(draft.include.favorites[0].icon_key, None);
    }

    #[test]
    fn test_sticker_size_keeps_previous_on_bad_input() {
        let mut draft = Collection::new("c1", "X").stage();
        apply_all(
            &mut draft,
            &[
                CollectionMutation::AddSticker,
                CollectionMutation::UpdateSticker {
                    index: 0,
                    edit: StickerEdit::Size("96".to_string()),
                },
                CollectionMutation::UpdateSticker {
                    index: 0,
                    edit: StickerEdit::Size("-1".to_string()),
                },
            ],
        );

        assert_eq!(draft.include.stickers[0].name, "Sticker 1");
        assert_eq!(draft.include.stickers[0].size, 96);
    }

    #[test]
    fn test_new_swap_pins_get_unique_ids() {
        let mut draft = Collection::new("c1", "X").stage();
        apply_all(
            &mut draft,
            &[CollectionMutation::AddSwapPin, CollectionMutation::AddSwapPin],
        );

        let pins = &draft.include.swap_pins;
        assert_eq!(pins[1].name, "Swap pin 2");
        assert!(is_swap_pin_id(&pins[0].id));
        assert_ne!(pins[0].id, pins[1].id);
    }

    #[test]
    fn test_frame_icon_must_exist() {
        let entries = icons();
        let library = IconLibrary::new(&entries);
        let mut preset = SwapPinPreset::new("swp-000001", "Door");

        SwapPinMutation::AddFrame.apply(&mut preset, &library).unwrap();
        assert_eq!(preset.frames[0].icon_key, "pin");

        let err = SwapPinMutation::SetFrameIcon {
            index: 0,
            key: "dragon".to_string(),
        }
        .apply(&mut preset, &library)
        .unwrap_err();
        assert_eq!(err, MutationError::UnknownIcon("dragon".to_string()));

        let empty = IconLibrary::new(&[]);
        assert_eq!(
            SwapPinMutation::AddFrame.apply(&mut preset, &empty),
            Err(MutationError::EmptyIconLibrary)
        );
    }

    #[test]
    fn test_swap_pin_toggles_and_rename() {
        let entries = icons();
        let library = IconLibrary::new(&entries);
        let mut preset = SwapPinPreset::new("swp-000001", "Door");

        SwapPinMutation::SetDefaultHud(true).apply(&mut preset, &library).unwrap();
        SwapPinMutation::SetHoverPopover(false).apply(&mut preset, &library).unwrap();
        SwapPinMutation::Rename { name: "   ".to_string() }
            .apply(&mut preset, &library)
            .unwrap();

        assert_eq!(preset.default_hud, Some(true));
        assert_eq!(preset.hover_popover, None);
        assert_eq!(preset.name, "Door");
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = CollectionMutation::UpdateSticker {
            index: 2,
            edit: StickerEdit::Size("48".to_string()),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: CollectionMutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }
}
