use serde::{Deserialize, Serialize};
use std::time::Duration;
use zoommap_model::DEFAULT_STICKER_SIZE;
use zoommap_suggest::DEFAULT_HIDE_DELAY;

/// Runtime knobs shared by the editors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Size given to newly added stickers
    #[serde(default = "default_sticker_size")]
    pub default_sticker_size: u32,

    /// Grace period before a link suggestion list hides after focus loss
    #[serde(default = "default_hide_delay_ms")]
    pub suggestion_hide_delay_ms: u64,
}

fn default_sticker_size() -> u32 {
    DEFAULT_STICKER_SIZE
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HIDE_DELAY.as_millis() as u64
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_sticker_size: default_sticker_size(),
            suggestion_hide_delay_ms: default_hide_delay_ms(),
        }
    }
}

impl EditorOptions {
    pub fn suggestion_hide_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_hide_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EditorOptions::default();
        assert_eq!(options.default_sticker_size, 64);
        assert_eq!(options.suggestion_hide_delay(), Duration::from_millis(150));
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: EditorOptions =
            serde_json::from_str(r#"{ "defaultStickerSize": 48 }"#).unwrap();
        assert_eq!(options.default_sticker_size, 48);
        assert_eq!(options.suggestion_hide_delay_ms, 150);
    }
}
