use crate::SuggestionCandidate;
use tracing::debug;
use zoommap_common::DocumentCorpus;

/// Flat, ordered candidate list for one editor session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionIndex {
    candidates: Vec<SuggestionCandidate>,
}

impl SuggestionIndex {
    /// Build the index from every markdown document in the corpus
    ///
    /// Tokens are computed relative to the active document, or the first
    /// markdown document when nothing is active. Candidates keep corpus order,
    /// then heading order, and are never deduplicated: two documents that
    /// resolve to the same token both appear.
    pub fn build(corpus: &dyn DocumentCorpus) -> Self {
        let documents: Vec<_> = corpus
            .documents()
            .into_iter()
            .filter(|d| d.is_markdown())
            .collect();

        let from_path = corpus
            .active_document()
            .or_else(|| documents.first().map(|d| d.path.clone()))
            .unwrap_or_default();

        let mut candidates = Vec::new();
        for doc in &documents {
            let token = corpus.link_token(&doc.path, &from_path);
            candidates.push(SuggestionCandidate::document(&token));

            for heading in corpus.headings(&doc.path) {
                candidates.push(SuggestionCandidate::heading(&token, &heading));
            }
        }

        debug!(
            documents = documents.len(),
            candidates = candidates.len(),
            from = %from_path,
            "Built link suggestion index"
        );

        Self { candidates }
    }

    pub fn from_candidates(candidates: Vec<SuggestionCandidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[SuggestionCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoommap_common::{CorpusDocument, MemoryCorpus};

    /// Corpus whose link text ignores the path, so every document collides
    struct CollidingCorpus {
        paths: Vec<&'static str>,
    }

    impl DocumentCorpus for CollidingCorpus {
        fn documents(&self) -> Vec<CorpusDocument> {
            self.paths.iter().map(|p| CorpusDocument::new(*p)).collect()
        }

        fn headings(&self, _path: &str) -> Vec<String> {
            vec!["H".to_string()]
        }

        fn active_document(&self) -> Option<String> {
            None
        }

        fn link_token(&self, _path: &str, _from_path: &str) -> String {
            "Notes".to_string()
        }
    }

    #[test]
    fn test_documents_then_headings_in_order() {
        let mut corpus = MemoryCorpus::new();
        corpus.add_document("Intro.md", &["Setup", "Rules"]);
        corpus.add_document("map.png", &[]);
        corpus.add_document("Towns/Port.md", &["Docks"]);

        let index = SuggestionIndex::build(&corpus);
        let values: Vec<&str> = index.candidates().iter().map(|c| c.value.as_str()).collect();

        assert_eq!(
            values,
            vec!["Intro", "Intro#Setup", "Intro#Rules", "Port", "Port#Docks"]
        );
        assert_eq!(index.candidates()[1].label, "Intro › Setup");
    }

    #[test]
    fn test_colliding_tokens_are_not_deduplicated() {
        let corpus = CollidingCorpus {
            paths: vec!["a/Notes.md", "b/Notes.md"],
        };

        let index = SuggestionIndex::build(&corpus);
        let values: Vec<&str> = index.candidates().iter().map(|c| c.value.as_str()).collect();

        assert_eq!(values, vec!["Notes", "Notes#H", "Notes", "Notes#H"]);
        assert_eq!(index.matches("notes").len(), 4);
    }

    #[test]
    fn test_same_folder_document_gets_short_token() {
        let mut corpus = MemoryCorpus::new();
        corpus.add_document("a/Notes.md", &[]);
        corpus.add_document("b/Notes.md", &[]);
        corpus.set_active("b/Session.md");

        let index = SuggestionIndex::build(&corpus);
        let values: Vec<&str> = index.candidates().iter().map(|c| c.value.as_str()).collect();

        assert_eq!(values, vec!["a/Notes", "Notes"]);
    }

    #[test]
    fn test_first_document_is_default_origin() {
        let mut corpus = MemoryCorpus::new();
        corpus.add_document("a/Notes.md", &[]);
        corpus.add_document("b/Notes.md", &[]);

        let index = SuggestionIndex::build(&corpus);
        let values: Vec<&str> = index.candidates().iter().map(|c| c.value.as_str()).collect();

        assert_eq!(values, vec!["Notes", "b/Notes"]);
    }

    #[test]
    fn test_empty_corpus() {
        let index = SuggestionIndex::build(&MemoryCorpus::new());
        assert!(index.is_empty());
    }
}
