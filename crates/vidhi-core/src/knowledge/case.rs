//! One knowledge base entry: trigger keywords plus a canned answer per language.

use serde::{Deserialize, Serialize};

use super::KnowledgeError;
use crate::resolver::Language;

/// Localized answer block (`"hi": { "answer": "..." }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedAnswer {
    pub answer: String,
}

impl LocalizedAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// A legal case: matched when any keyword occurs in the lowercased question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Trigger phrases. Membership only; order is irrelevant.
    pub keywords: Vec<String>,
    /// English (primary language) answer.
    pub answer: String,
    /// Hindi answer, if authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi: Option<LocalizedAnswer>,
    /// Telugu answer, if authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub te: Option<LocalizedAnswer>,
}

impl Case {
    /// Creates a case with only the English answer.
    pub fn new<I, S>(keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            answer: answer.into(),
            hi: None,
            te: None,
        }
    }

    /// Attaches (or replaces) the answer for a non-primary language.
    /// Setting [`Language::En`] replaces the default answer.
    pub fn with_answer(mut self, language: Language, answer: impl Into<String>) -> Self {
        match language {
            Language::En => self.answer = answer.into(),
            Language::Hi => self.hi = Some(LocalizedAnswer::new(answer)),
            Language::Te => self.te = Some(LocalizedAnswer::new(answer)),
        }
        self
    }

    /// True when any keyword is a substring of `lowered_query`.
    /// The caller lowercases; keywords are compared as authored.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_query.contains(keyword.as_str()))
    }

    /// The authored answer for `language`, without falling back.
    pub fn localized(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => Some(self.answer.as_str()),
            Language::Hi => self.hi.as_ref().map(|l| l.answer.as_str()),
            Language::Te => self.te.as_ref().map(|l| l.answer.as_str()),
        }
    }

    /// The answer for `language`, falling back to the English answer.
    pub fn answer_for(&self, language: Language) -> &str {
        self.localized(language).unwrap_or(self.answer.as_str())
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), KnowledgeError> {
        let invalid = |reason: &str| KnowledgeError::InvalidCase {
            index,
            reason: reason.to_string(),
        };
        if self.keywords.is_empty() {
            return Err(invalid("keywords must not be empty"));
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(invalid("keywords must not contain an empty string"));
        }
        if self.answer.trim().is_empty() {
            return Err(invalid("answer must not be empty"));
        }
        for language in [Language::Hi, Language::Te] {
            if let Some(text) = self.localized(language) {
                if text.trim().is_empty() {
                    return Err(KnowledgeError::InvalidCase {
                        index,
                        reason: format!("{} answer must not be empty", language.code()),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divorce_case() -> Case {
        Case::new(["divorce", "तलाक"], "File a petition")
            .with_answer(Language::Hi, "याचिका दायर करें")
    }

    #[test]
    fn test_matches_substring_of_lowered_query() {
        let case = divorce_case();
        assert!(case.matches("how do i get a divorce?"));
        assert!(case.matches("मुझे तलाक चाहिए"));
        assert!(!case.matches("wages unpaid"));
        assert!(!case.matches(""));
    }

    #[test]
    fn test_answer_for_falls_back_to_english() {
        let case = divorce_case();
        assert_eq!(case.answer_for(Language::En), "File a petition");
        assert_eq!(case.answer_for(Language::Hi), "याचिका दायर करें");
        assert_eq!(case.answer_for(Language::Te), "File a petition");
        assert_eq!(case.localized(Language::Te), None);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields_and_optional_languages() {
        let case: Case = serde_json::from_str(
            r#"{"keywords": ["rent"], "answer": "Talk to the rent controller", "category": "tenancy",
                "te": {"answer": "అద్దె నియంత్రణాధికారిని సంప్రదించండి"}}"#,
        )
        .unwrap();
        assert_eq!(case.keywords, vec!["rent".to_string()]);
        assert!(case.hi.is_none());
        assert_eq!(
            case.localized(Language::Te),
            Some("అద్దె నియంత్రణాధికారిని సంప్రదించండి")
        );
    }

    #[test]
    fn test_validate_rejects_empty_parts() {
        assert!(divorce_case().validate(0).is_ok());

        let no_keywords = Case::new(Vec::<String>::new(), "answer");
        assert!(matches!(
            no_keywords.validate(2),
            Err(KnowledgeError::InvalidCase { index: 2, .. })
        ));

        let blank_keyword = Case::new(["wages", ""], "answer");
        assert!(blank_keyword.validate(0).is_err());

        let blank_answer = Case::new(["wages"], "   ");
        assert!(blank_answer.validate(0).is_err());

        let blank_hindi = Case::new(["wages"], "answer").with_answer(Language::Hi, "");
        let err = blank_hindi.validate(1).unwrap_err();
        assert_eq!(err.to_string(), "invalid case #1: hi answer must not be empty");
    }
}
