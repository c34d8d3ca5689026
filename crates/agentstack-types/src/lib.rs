//! Catalog types shared by every AgentStack crate.
//!
//! The catalog is loaded once, normalized into canonical [`AgentRecord`] and
//! [`CategoryRecord`] values, and treated as read-only afterwards.

pub mod builtin;
pub mod domain;
pub mod error;
pub mod raw;

pub use domain::*;
pub use error::{Error, Result};
pub use raw::{RawAgentRecord, RawCatalog, RawCategoryRecord, RawId};
