use crate::Collection;
use serde::{Deserialize, Serialize};

/// Icon library entry, owned by the host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconEntry {
    pub key: String,

    /// Vault path or `data:` URL
    #[serde(default)]
    pub path_or_data_url: String,
}

impl IconEntry {
    pub fn new(key: impl Into<String>, path_or_data_url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path_or_data_url: path_or_data_url.into(),
        }
    }
}

/// Persisted settings root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomMapSettings {
    #[serde(default)]
    pub icons: Vec<IconEntry>,

    #[serde(default, rename = "baseCollections")]
    pub collections: Vec<Collection>,
}

impl ZoomMapSettings {
    /// Find a collection position by id, falling back to an exact name match
    pub fn position_of(&self, id_or_name: &str) -> Option<usize> {
        self.collections
            .iter()
            .position(|c| c.id == id_or_name)
            .or_else(|| self.collections.iter().position(|c| c.name == id_or_name))
    }

    /// Remove a collection after its editor reported a delete
    pub fn remove_collection(&mut self, index: usize) -> Option<Collection> {
        if index < self.collections.len() {
            Some(self.collections.remove(index))
        } else {
            None
        }
    }
}
