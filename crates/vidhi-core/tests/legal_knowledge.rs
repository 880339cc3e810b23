//! Checks the knowledge base shipped at the workspace root.

use std::path::PathBuf;

use vidhi_core::{resolve, KnowledgeBase, Language};

fn shipped_knowledge() -> KnowledgeBase {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("legal_knowledge.json");
    KnowledgeBase::load(&path).expect("shipped legal_knowledge.json must load")
}

#[test]
fn test_shipped_knowledge_loads_with_lowercase_keywords() {
    let kb = shipped_knowledge();
    assert!(!kb.is_empty());
    for case in kb.cases() {
        for keyword in &case.keywords {
            assert_eq!(
                keyword,
                &keyword.to_lowercase(),
                "keyword {keyword:?} can never match a lowercased query"
            );
        }
    }
}

#[test]
fn test_default_message_topics_are_covered() {
    let kb = shipped_knowledge();
    for query in ["divorce", "wages", "property"] {
        let resolution = resolve(&kb, query, "en");
        assert!(!resolution.is_fallback(), "{query} should match a case");
    }
    for query in ["तलाक", "वेतन", "संपत्ति"] {
        assert!(!resolve(&kb, query, "hi").is_fallback(), "{query} should match a case");
    }
    for query in ["డివోర్స్", "వేతనాలు", "ఆస్తి"] {
        assert!(!resolve(&kb, query, "te").is_fallback(), "{query} should match a case");
    }
}

#[test]
fn test_landlord_question_reaches_tenancy_case() {
    let kb = shipped_knowledge();
    let resolution = resolve(&kb, "My landlord is forcing me out", "en");
    let case = &kb.cases()[resolution.case_index.unwrap()];
    assert!(case.keywords.iter().any(|k| k == "landlord"));
}

#[test]
fn test_unmatched_question_gets_default_message() {
    let kb = shipped_knowledge();
    for language in Language::all() {
        let resolution = resolve(&kb, "what is the weather today", language.code());
        assert_eq!(resolution.text, language.default_message());
    }
}
