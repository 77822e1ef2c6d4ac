//! Per-map pin size overrides
//!
//! A flat form over the icons used on one map. Unlike the collection editor
//! there is no staged entity: the inputs are the working copy, and save
//! returns the normalized overrides for the caller to store.

use crate::inputs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinSizeRow {
    pub icon_key: String,
    pub base_size: u32,
    #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_size: Option<u32>,
    #[serde(default)]
    pub img_url: String,
}

impl PinSizeRow {
    pub fn new(icon_key: impl Into<String>, base_size: u32) -> Self {
        Self {
            icon_key: icon_key.into(),
            base_size,
            override_size: None,
            img_url: String::new(),
        }
    }

    pub fn with_override(mut self, size: u32) -> Self {
        self.override_size = Some(size);
        self
    }

    /// Placeholder text for an empty input
    pub fn placeholder(&self) -> String {
        self.base_size.to_string()
    }
}

/// Override for each icon key; `None` means "use the base size"
pub type PinSizeOverrides = BTreeMap<String, Option<u32>>;

#[derive(Debug, Clone)]
pub struct PinSizeEditor {
    rows: Vec<PinSizeRow>,
    inputs: Vec<String>,
    focus: Option<usize>,
}

impl PinSizeEditor {
    /// Prefill inputs from the stored overrides
    ///
    /// `focus_key` picks the input that starts focused; an unknown key
    /// leaves nothing focused.
    pub fn open(rows: Vec<PinSizeRow>, focus_key: Option<&str>) -> Self {
        let inputs = rows
            .iter()
            .map(|row| {
                if inputs::shows_override(row.override_size, row.base_size) {
                    row.override_size.map(|n| n.to_string()).unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .collect();
        let focus = focus_key.and_then(|key| rows.iter().position(|r| r.icon_key == key));

        debug!(rows = rows.len(), focus = ?focus_key, "Opened pin size editor");
        Self { rows, inputs, focus }
    }

    pub fn rows(&self) -> &[PinSizeRow] {
        &self.rows
    }

    /// Current text of each input, in row order
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn input(&self, icon_key: &str) -> Option<&str> {
        self.position(icon_key).map(|i| self.inputs[i].as_str())
    }

    pub fn focused_key(&self) -> Option<&str> {
        self.focus.map(|i| self.rows[i].icon_key.as_str())
    }

    /// Replace the text of one input; returns false for an unknown key
    pub fn set_input(&mut self, icon_key: &str, raw: impl Into<String>) -> bool {
        match self.position(icon_key) {
            Some(i) => {
                self.inputs[i] = raw.into();
                true
            }
            None => false,
        }
    }

    fn position(&self, icon_key: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.icon_key == icon_key)
    }

    /// Normalize every input; each row gets an entry
    pub fn save(self) -> PinSizeOverrides {
        let overrides: PinSizeOverrides = self
            .rows
            .iter()
            .zip(&self.inputs)
            .map(|(row, raw)| (row.icon_key.clone(), inputs::size_override(raw, row.base_size)))
            .collect();

        debug!(
            overridden = overrides.values().filter(|v| v.is_some()).count(),
            "Saved pin sizes"
        );
        overrides
    }

    pub fn cancel(self) {}
}
