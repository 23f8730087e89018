//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! drawback claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and JSON payloads
//! - `builders`: Builder for claims with sensible defaults
//! - `storage`: Temporary data directories for file store tests
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod storage;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use storage::*;
pub use generators::*;
