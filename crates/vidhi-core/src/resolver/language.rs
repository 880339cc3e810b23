//! Supported answer languages and their not-found messages.

use serde::{Deserialize, Serialize};

/// Languages the assistant answers in. [`Language::En`] is the primary language and the
/// fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Hindi.
    Hi,
    /// Telugu.
    Te,
}

impl Language {
    /// Wire code used in the `language` form field and in the knowledge file.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Te => "తెలుగు",
        }
    }

    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Hi, Self::Te]
    }

    /// Parses a language code. Only the exact codes `en`, `hi` and `te` are recognized.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "te" => Some(Self::Te),
            _ => None,
        }
    }

    /// Like [`Language::from_code`] but unrecognized codes become [`Language::En`].
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Reply used when no case matches the question.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::En => "Sorry, I couldn't find an answer. Try asking about 'divorce', 'wages', or 'property'.",
            Self::Hi => "क्षमा करें, मुझे जवाब नहीं मिला। 'तलाक', 'वेतन' या 'संपत्ति' के बारे में पूछें।",
            Self::Te => "క్షమించండి, నాకు సమాధానం కనుగొనబడలేదు. 'డివోర్స్', 'వేతనాలు' లేదా 'ఆస్తి' గురించి అడగండి.",
        }
    }
}
