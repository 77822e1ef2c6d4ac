use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions the image store lists as pickable images
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp", "bmp", "avif"];

/// Image store abstraction: resolves stored path strings to displayable sources
pub trait ImageStore {
    /// Resolve a vault-relative path to a displayable resource URL
    fn resource_url(&self, path: &str) -> Option<String>;

    /// List available image files (vault-relative paths)
    fn list_images(&self) -> Vec<String>;
}

/// Resolve a stored `path_or_data_url` to something an image element can show
///
/// `data:` URLs pass through untouched; empty strings resolve to nothing.
pub fn image_source(store: &dyn ImageStore, path_or_data_url: &str) -> Option<String> {
    if path_or_data_url.starts_with("data:") {
        Some(path_or_data_url.to_string())
    } else if path_or_data_url.is_empty() {
        None
    } else {
        store.resource_url(path_or_data_url)
    }
}

pub fn has_image_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Real image store rooted at a vault directory
pub struct DirectoryImageStore {
    root: PathBuf,
}

impl DirectoryImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageStore for DirectoryImageStore {
    fn resource_url(&self, path: &str) -> Option<String> {
        let full = self.root.join(path);
        if full.is_file() {
            Some(format!("file://{}", full.display()))
        } else {
            None
        }
    }

    fn list_images(&self) -> Vec<String> {
        let mut images: Vec<String> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| vault_relative(&self.root, e.path()))
            .filter(|p| has_image_extension(p))
            .collect();
        images.sort();
        images
    }
}

/// Mock image store for testing
pub struct MemoryImageStore {
    pub existing_files: BTreeSet<String>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self {
            existing_files: BTreeSet::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<String>) {
        self.existing_files.insert(path.into());
    }
}

impl Default for MemoryImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore for MemoryImageStore {
    fn resource_url(&self, path: &str) -> Option<String> {
        self.existing_files
            .contains(path)
            .then(|| format!("app://local/{}", path))
    }

    fn list_images(&self) -> Vec<String> {
        self.existing_files
            .iter()
            .filter(|p| has_image_extension(p))
            .cloned()
            .collect()
    }
}

/// Vault-relative, `/`-separated form of a path under `root`
pub(crate) fn vault_relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_urls_pass_through() {
        let store = MemoryImageStore::new();
        let src = image_source(&store, "data:image/png;base64,AAAA");
        assert_eq!(src.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_paths_resolve_through_store() {
        let mut store = MemoryImageStore::new();
        store.add_file("icons/pin.svg");

        assert_eq!(
            image_source(&store, "icons/pin.svg").as_deref(),
            Some("app://local/icons/pin.svg")
        );
        assert!(image_source(&store, "icons/missing.svg").is_none());
        assert!(image_source(&store, "").is_none());
    }

    #[test]
    fn test_directory_store_lists_images_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("maps")).unwrap();
        std::fs::write(dir.path().join("maps/world.PNG"), b"png").unwrap();
        std::fs::write(dir.path().join("notes.md"), b"# Notes").unwrap();

        let store = DirectoryImageStore::new(dir.path());
        assert_eq!(store.list_images(), vec!["maps/world.PNG".to_string()]);
        assert!(store.resource_url("maps/world.PNG").is_some());
        assert!(store.resource_url("maps/nope.png").is_none());
    }
}
