//! # Platter Datastore Crate
//!
//! This crate turns the two JSON dataset files into the immutable `Dataset`
//! snapshot the analytics engine queries.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Adapter:** All file handling lives here. Records are validated
//!   into typed `Restaurant` and `Order` values once, at load time, so the
//!   analytics code never sees loosely-typed data.
//! - **Whole Snapshots:** A load either produces a complete `Dataset` or an
//!   error. Callers swap snapshots as a unit; nothing is partially updated.
//!
//! ## Public API
//!
//! - `JsonDataSource`: Loads a dataset from the configured file pair.
//! - `DataError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use error::DataError;
pub use loader::JsonDataSource;
