use crate::CommonResult;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use zoommap_model::ZoomMapSettings;

/// Destination for settings after a successful commit
///
/// Editors call `save_settings` once per outer commit and do not retry;
/// failure handling belongs to the sink.
pub trait PersistenceSink {
    fn save_settings(&self, settings: &ZoomMapSettings) -> CommonResult<()>;
}

/// Settings persisted as pretty JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, or defaults when the file does not exist yet
    pub fn load(&self) -> CommonResult<ZoomMapSettings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Settings file missing, using defaults");
            return Ok(ZoomMapSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }
}

impl PersistenceSink for JsonFileSink {
    fn save_settings(&self, settings: &ZoomMapSettings) -> CommonResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)?;

        info!(
            path = %self.path.display(),
            collections = settings.collections.len(),
            "Settings saved"
        );
        Ok(())
    }
}

/// Mock sink that records every save
#[derive(Debug, Default)]
pub struct MemorySink {
    saves: Mutex<Vec<ZoomMapSettings>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn last_saved(&self) -> Option<ZoomMapSettings> {
        self.saves.lock().ok().and_then(|s| s.last().cloned())
    }
}

impl PersistenceSink for MemorySink {
    fn save_settings(&self, settings: &ZoomMapSettings) -> CommonResult<()> {
        self.saves
            .lock()
            .map_err(|_| "memory sink poisoned")?
            .push(settings.clone());
        Ok(())
    }
}
