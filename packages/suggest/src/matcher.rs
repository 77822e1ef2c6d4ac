use crate::{SuggestionCandidate, SuggestionIndex};

/// Upper bound on returned matches
pub const MAX_SUGGESTIONS: usize = 20;

/// Filter candidates by case-insensitive substring on value or label
///
/// A blank query matches nothing; callers hide the list rather than showing
/// everything. The first `limit` matches in candidate order win.
pub fn match_candidates<'a>(
    candidates: &'a [SuggestionCandidate],
    query: &str,
    limit: usize,
) -> Vec<&'a SuggestionCandidate> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|c| c.value.to_lowercase().contains(&q) || c.label.to_lowercase().contains(&q))
        .take(limit)
        .collect()
}

impl SuggestionIndex {
    /// Matches for a live query, at most [`MAX_SUGGESTIONS`]
    pub fn matches(&self, query: &str) -> Vec<&SuggestionCandidate> {
        match_candidates(self.candidates(), query, MAX_SUGGESTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro_index() -> SuggestionIndex {
        SuggestionIndex::from_candidates(vec![
            SuggestionCandidate::new("Intro", "intro"),
            SuggestionCandidate::new("Intro › Setup", "intro#setup"),
        ])
    }

    #[test]
    fn test_heading_query_matches_heading_only() {
        let index = intro_index();
        let matches = index.matches("setup");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "intro#setup");
    }

    #[test]
    fn test_blank_queries_match_nothing() {
        let index = intro_index();
        assert!(index.matches("").is_empty());
        assert!(index.matches("   \t").is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let index = intro_index();
        assert_eq!(index.matches("  INTRO ").len(), 2);
    }

    #[test]
    fn test_label_only_match() {
        let index = SuggestionIndex::from_candidates(vec![SuggestionCandidate::new(
            "Intro › Setup",
            "intro#setup",
        )]);
        assert_eq!(index.matches("›").len(), 1);
    }

    #[test]
    fn test_results_capped_in_index_order() {
        let candidates: Vec<SuggestionCandidate> = (0..25)
            .map(|i| SuggestionCandidate::document(&format!("area {}", i)))
            .collect();
        let index = SuggestionIndex::from_candidates(candidates);

        let matches = index.matches("a");
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(m.value, format!("area {}", i));
        }
    }
}
