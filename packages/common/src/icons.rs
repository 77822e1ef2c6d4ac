use zoommap_model::IconEntry;

/// Read-only view over the externally owned icon library
#[derive(Debug, Clone, Copy)]
pub struct IconLibrary<'a> {
    entries: &'a [IconEntry],
}

impl<'a> IconLibrary<'a> {
    pub fn new(entries: &'a [IconEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [IconEntry] {
        self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Key new swap pin frames start with
    pub fn first_key(&self) -> Option<&'a str> {
        self.entries.first().map(|e| e.key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
