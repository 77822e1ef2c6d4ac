use serde::{Deserialize, Serialize};

/// Label shown to the user and token inserted on selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionCandidate {
    pub label: String,
    pub value: String,
}

impl SuggestionCandidate {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whole-document candidate
    pub fn document(token: &str) -> Self {
        Self::new(token, token)
    }

    /// Heading candidate: `token › heading` / `token#heading`
    pub fn heading(token: &str, heading: &str) -> Self {
        Self::new(
            format!("{} › {}", token, heading),
            format!("{}#{}", token, heading),
        )
    }
}
