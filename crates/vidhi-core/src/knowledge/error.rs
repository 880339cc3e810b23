//! Knowledge base load errors.

use std::path::PathBuf;

/// Errors that prevent a knowledge base from being loaded. All of them are fatal at startup.
#[derive(thiserror::Error, Debug)]
pub enum KnowledgeError {
    /// The file is missing or unreadable.
    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or lacks required fields.
    #[error("malformed knowledge base {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A case parsed but breaks a content rule (empty keywords, empty answer, ...).
    #[error("invalid case #{index}: {reason}")]
    InvalidCase { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let error = KnowledgeError::Io {
            path: PathBuf::from("legal_knowledge.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let text = error.to_string();
        assert!(text.contains("legal_knowledge.json"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn test_invalid_case_display() {
        let error = KnowledgeError::InvalidCase {
            index: 3,
            reason: "keywords must not be empty".to_string(),
        };
        assert_eq!(error.to_string(), "invalid case #3: keywords must not be empty");
    }
}
