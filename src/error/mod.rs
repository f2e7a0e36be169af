//! Error identities and classification
//!
//! This module provides the [`Known`] identity type, the [`KnownError`]
//! wrapper raised by every assertion helper, and the chain-walking check that
//! separates classified errors from unclassified ones.

pub mod classification;
pub mod report;

// Re-export main types for convenient access
pub use classification::{find_known, is_known, BoxError, Known, KnownError};
pub use report::PanicReport;
