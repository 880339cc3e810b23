//! Query resolver: maps (question, language code) to a canned answer.

mod language;

pub use language::Language;

use crate::knowledge::KnowledgeBase;

/// Outcome of resolving one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Text to send back to the user.
    pub text: &'a str,
    /// Language actually used (unrecognized codes resolve to English).
    pub language: Language,
    /// Index of the matching case; `None` when the default message was used.
    pub case_index: Option<usize>,
}

impl Resolution<'_> {
    pub fn is_fallback(&self) -> bool {
        self.case_index.is_none()
    }
}

/// Resolves `query` against `kb` in `language_code`.
///
/// The query is lowercased, then cases are scanned in order and the first one with a keyword
/// contained in the query wins. Its answer in the requested language is returned when authored,
/// otherwise its English answer. With no match the language's default message is returned.
/// Unknown language codes never fail; they behave as English.
pub fn resolve<'a>(kb: &'a KnowledgeBase, query: &str, language_code: &str) -> Resolution<'a> {
    let language = Language::from_code_or_default(language_code);
    let lowered = query.to_lowercase();
    match kb.find_match(&lowered) {
        Some((index, case)) => Resolution {
            text: case.answer_for(language),
            language,
            case_index: Some(index),
        },
        None => Resolution {
            text: language.default_message(),
            language,
            case_index: None,
        },
    }
}
