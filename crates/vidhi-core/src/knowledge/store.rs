//! In-memory knowledge base loaded once from a JSON file.

use serde::Deserialize;
use std::path::Path;

use super::{Case, KnowledgeError};
use crate::resolver::Language;

#[derive(Deserialize)]
struct KnowledgeDocument {
    legal_cases: Vec<Case>,
}

/// Ordered, immutable list of cases. Share it behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    cases: Vec<Case>,
}

impl KnowledgeBase {
    /// Reads, parses and validates the knowledge file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: KnowledgeDocument =
            serde_json::from_str(&raw).map_err(|source| KnowledgeError::Parse {
                origin: path.display().to_string(),
                source,
            })?;
        let kb = Self::from_cases(document.legal_cases)?;
        tracing::info!(
            path = %path.display(),
            cases = kb.len(),
            hi = kb.coverage(Language::Hi),
            te = kb.coverage(Language::Te),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Parses a knowledge document held in memory.
    pub fn from_json_str(raw: &str) -> Result<Self, KnowledgeError> {
        let document: KnowledgeDocument =
            serde_json::from_str(raw).map_err(|source| KnowledgeError::Parse {
                origin: "<inline>".to_string(),
                source,
            })?;
        Self::from_cases(document.legal_cases)
    }

    /// Builds a knowledge base from cases in priority order.
    pub fn from_cases(cases: Vec<Case>) -> Result<Self, KnowledgeError> {
        for (index, case) in cases.iter().enumerate() {
            case.validate(index)?;
            for keyword in &case.keywords {
                if keyword.chars().any(char::is_uppercase) {
                    tracing::warn!(
                        case = index,
                        keyword = %keyword,
                        "Keyword has uppercase characters and will never match a lowercased query"
                    );
                }
            }
        }
        Ok(Self { cases })
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// First case (in authored order) with a keyword inside `lowered_query`.
    pub fn find_match(&self, lowered_query: &str) -> Option<(usize, &Case)> {
        self.cases
            .iter()
            .enumerate()
            .find(|(_, case)| case.matches(lowered_query))
    }

    /// Number of cases with an authored answer for `language`.
    pub fn coverage(&self, language: Language) -> usize {
        self.cases
            .iter()
            .filter(|case| case.localized(language).is_some())
            .count()
    }
}
