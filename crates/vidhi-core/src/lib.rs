//! vidhi-core: legal assistant core library (config, case knowledge base, multilingual resolver).
//!
//! The gateway owns one [`KnowledgeBase`] for the lifetime of the process and hands it to
//! [`resolve`] for every question; nothing in this crate holds global state.

mod knowledge;
mod resolver;
mod shared;

// Shared
pub use shared::{CoreConfig, DEFAULT_KNOWLEDGE_PATH, DEFAULT_PORT, ENV_CONFIG_PATH, ENV_PORT};

// Knowledge
pub use knowledge::{Case, KnowledgeBase, KnowledgeError, LocalizedAnswer};

// Resolver
pub use resolver::{resolve, Language, Resolution};
