//! Case knowledge base (the legal "cases" the assistant can answer from).
//!
//! ## File format
//!
//! ```json
//! {
//!   "legal_cases": [
//!     {
//!       "keywords": ["divorce", "तलाक"],
//!       "answer": "English answer",
//!       "hi": { "answer": "Hindi answer" },
//!       "te": { "answer": "Telugu answer" }
//!     }
//!   ]
//! }
//! ```
//!
//! Case order is the match priority: the resolver returns the first case whose keywords hit.

mod case;
mod error;
mod store;

pub use case::{Case, LocalizedAnswer};
pub use error::KnowledgeError;
pub use store::KnowledgeBase;
