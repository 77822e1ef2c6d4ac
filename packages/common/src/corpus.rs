//! # Document Corpus
//!
//! Supplies the documents, heading outlines, and active document that the
//! link suggestion index is built from.
//!
//! Documents are identified by vault-relative, `/`-separated paths. Link
//! tokens follow the short-link convention: the bare file name when it
//! resolves unambiguously from the current document, the full path (without
//! extension) otherwise.

use crate::filesystem::vault_relative;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One document in the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDocument {
    pub path: String,
}

impl CorpusDocument {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        name.rfind('.').filter(|&i| i > 0).map(|i| &name[i + 1..])
    }

    pub fn is_markdown(&self) -> bool {
        self.extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false)
    }

    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without its extension
    pub fn basename(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(i) if i > 0 => &name[..i],
            _ => name,
        }
    }

    /// Full path without the extension
    pub fn path_without_extension(&self) -> &str {
        let ext_len = self.extension().map(|e| e.len() + 1).unwrap_or(0);
        &self.path[..self.path.len() - ext_len]
    }

    pub fn folder(&self) -> &str {
        folder_of(&self.path)
    }
}

fn folder_of(path: &str) -> &str {
    path.rfind('/').map(|i| &path[..i]).unwrap_or("")
}

/// Corpus accessor consumed by the suggestion index builder
pub trait DocumentCorpus {
    /// All documents, in corpus order
    fn documents(&self) -> Vec<CorpusDocument>;

    /// Heading texts of a document, in outline order
    fn headings(&self, path: &str) -> Vec<String>;

    /// Path of the document the user is working in, if any
    fn active_document(&self) -> Option<String>;

    /// Short reference token for `path` as seen from `from_path`
    fn link_token(&self, path: &str, from_path: &str) -> String;
}

/// Resolves short link tokens over a fixed set of document paths
#[derive(Debug, Clone, Default)]
pub struct LinkTextResolver {
    by_basename: HashMap<String, Vec<CorpusDocument>>,
}

impl LinkTextResolver {
    pub fn new<'a>(documents: impl IntoIterator<Item = &'a CorpusDocument>) -> Self {
        let mut by_basename: HashMap<String, Vec<CorpusDocument>> = HashMap::new();
        for doc in documents {
            by_basename
                .entry(doc.basename().to_lowercase())
                .or_default()
                .push(doc.clone());
        }
        Self { by_basename }
    }

    /// Token for `path` from `from_path`
    ///
    /// The bare name wins when it is unique in the corpus, or when the
    /// target sits in the same folder as `from_path` (the resolver prefers
    /// siblings). Two documents may therefore share a token.
    pub fn link_text(&self, path: &str, from_path: &str) -> String {
        let doc = CorpusDocument::new(path);
        let shares_name = self
            .by_basename
            .get(&doc.basename().to_lowercase())
            .map(|docs| docs.len() > 1)
            .unwrap_or(false);

        if !shares_name || doc.folder() == folder_of(from_path) {
            doc.basename().to_string()
        } else {
            doc.path_without_extension().to_string()
        }
    }
}

/// Extract heading texts from markdown source
pub fn parse_headings(source: &str) -> Vec<String> {
    let mut headings = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Heading { .. }) => current = Some(String::new()),
            Event::End(TagEnd::Heading(_)) => {
                if let Some(text) = current.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        headings.push(text);
                    }
                }
            }
            Event::Text(cow) | Event::Code(cow) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&cow);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(text) = current.as_mut() {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}

/// Corpus backed by a vault directory on disk
///
/// The document list is scanned once at construction; headings are read on
/// demand.
pub struct VaultCorpus {
    root: PathBuf,
    documents: Vec<CorpusDocument>,
    active: Option<String>,
    resolver: LinkTextResolver,
}

impl VaultCorpus {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut documents: Vec<CorpusDocument> = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| vault_relative(&root, e.path()))
            .map(CorpusDocument::new)
            .collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(root = %root.display(), documents = documents.len(), "Scanned vault");

        let resolver = LinkTextResolver::new(documents.iter().filter(|d| d.is_markdown()));
        Self {
            root,
            documents,
            active: None,
            resolver,
        }
    }

    pub fn with_active(mut self, path: impl Into<String>) -> Self {
        self.active = Some(path.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

impl DocumentCorpus for VaultCorpus {
    fn documents(&self) -> Vec<CorpusDocument> {
        self.documents.clone()
    }

    fn headings(&self, path: &str) -> Vec<String> {
        match std::fs::read_to_string(self.root.join(path)) {
            Ok(source) => parse_headings(&source),
            Err(e) => {
                warn!(path, error = %e, "Failed to read document outline");
                Vec::new()
            }
        }
    }

    fn active_document(&self) -> Option<String> {
        self.active.clone()
    }

    fn link_token(&self, path: &str, from_path: &str) -> String {
        self.resolver.link_text(path, from_path)
    }
}

/// Mock corpus for testing
#[derive(Debug, Default)]
pub struct MemoryCorpus {
    documents: Vec<(CorpusDocument, Vec<String>)>,
    active: Option<String>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, path: impl Into<String>, headings: &[&str]) {
        self.documents.push((
            CorpusDocument::new(path),
            headings.iter().map(|h| h.to_string()).collect(),
        ));
    }

    pub fn set_active(&mut self, path: impl Into<String>) {
        self.active = Some(path.into());
    }
}

impl DocumentCorpus for MemoryCorpus {
    fn documents(&self) -> Vec<CorpusDocument> {
        self.documents.iter().map(|(d, _)| d.clone()).collect()
    }

    fn headings(&self, path: &str) -> Vec<String> {
        self.documents
            .iter()
            .find(|(d, _)| d.path == path)
            .map(|(_, h)| h.clone())
            .unwrap_or_default()
    }

    fn active_document(&self) -> Option<String> {
        self.active.clone()
    }

    fn link_token(&self, path: &str, from_path: &str) -> String {
        LinkTextResolver::new(
            self.documents
                .iter()
                .map(|(d, _)| d)
                .filter(|d| d.is_markdown()),
        )
        .link_text(path, from_path)
    }
}
