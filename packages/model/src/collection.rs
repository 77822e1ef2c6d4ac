use serde::{Deserialize, Serialize};

/// A named bundle of presets bound to one or more base images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<CollectionBindings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<CollectionInclude>,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bindings: None,
            include: None,
        }
    }

    /// Bound base image paths, empty when the container is absent
    pub fn base_paths(&self) -> &[String] {
        self.bindings
            .as_ref()
            .map(|b| b.base_paths.as_slice())
            .unwrap_or(&[])
    }

    /// Swap pins, empty when the container is absent
    pub fn swap_pins(&self) -> &[SwapPinPreset] {
        self.include
            .as_ref()
            .map(|i| i.swap_pins.as_slice())
            .unwrap_or(&[])
    }
}

/// Base images a collection is bound to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionBindings {
    /// Unique file identifiers in display order
    #[serde(default)]
    pub base_paths: Vec<String>,
}

/// Everything a collection contributes to a map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInclude {
    /// Icon library keys; membership matters, order does not
    #[serde(default)]
    pub pin_keys: Vec<String>,

    #[serde(default)]
    pub favorites: Vec<MarkerPreset>,

    #[serde(default)]
    pub stickers: Vec<StickerPreset>,

    #[serde(default)]
    pub swap_pins: Vec<SwapPinPreset>,
}

/// Named marker favorite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPreset {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_name: Option<String>,

    #[serde(default)]
    pub open_editor: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_template: Option<String>,
}

/// Image placed on the map at a fixed pixel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerPreset {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub image_path: String,

    /// Pixels, always positive
    #[serde(default = "default_sticker_size")]
    pub size: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_name: Option<String>,
}

pub const DEFAULT_STICKER_SIZE: u32 = 64;

fn default_sticker_size() -> u32 {
    DEFAULT_STICKER_SIZE
}

/// Multi-frame pin that cycles through icons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapPinPreset {
    /// Generated once, never reused or edited
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub frames: Vec<SwapPinFrame>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hud: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scale_like_sticker: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_popover: Option<bool>,
}

impl SwapPinPreset {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            frames: Vec::new(),
            default_hud: None,
            default_scale_like_sticker: None,
            hover_popover: None,
        }
    }
}

/// One frame of a swap pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapPinFrame {
    /// Key of an icon library entry
    pub icon_key: String,

    /// Free-form reference token, usually `note#heading`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl SwapPinFrame {
    pub fn new(icon_key: impl Into<String>) -> Self {
        Self {
            icon_key: icon_key.into(),
            link: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_without_containers_deserializes() {
        let json = r#"{ "id": "c1", "name": "Dungeon" }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.name, "Dungeon");
        assert!(collection.bindings.is_none());
        assert!(collection.include.is_none());
        assert!(collection.base_paths().is_empty());
        assert!(collection.swap_pins().is_empty());
    }

    #[test]
    fn test_partial_include_defaults_missing_lists() {
        let json = r#"{
            "id": "c1",
            "name": "Town",
            "include": { "pinKeys": ["tavern"] }
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        let include = collection.include.unwrap();
        assert_eq!(include.pin_keys, vec!["tavern"]);
        assert!(include.favorites.is_empty());
        assert!(include.swap_pins.is_empty());
    }

    #[test]
    fn test_swap_pin_uses_camel_case_keys() {
        let mut preset = SwapPinPreset::new("swp-abc123", "Door");
        preset.default_scale_like_sticker = Some(true);
        preset.frames.push(SwapPinFrame::new("door-open"));

        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["defaultScaleLikeSticker"], true);
        assert_eq!(json["frames"][0]["iconKey"], "door-open");
        assert!(json.get("hoverPopover").is_none());
        assert!(json["frames"][0].get("link").is_none());
    }

    #[test]
    fn test_sticker_size_defaults() {
        let sticker: StickerPreset =
            serde_json::from_str(r#"{ "name": "Flag", "imagePath": "flag.png" }"#).unwrap();
        assert_eq!(sticker.size, DEFAULT_STICKER_SIZE);
    }
}
