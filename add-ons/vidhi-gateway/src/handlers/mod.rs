//! HTTP handlers.

mod ask;
mod system;

pub(crate) use ask::ask;
pub(crate) use system::{health, status};
