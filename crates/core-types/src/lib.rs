//! # Platter Core Types
//!
//! Layer 0 of the workspace: the plain data records every other crate speaks.
//! This crate has no knowledge of files, HTTP or aggregation; it only defines
//! the typed `Restaurant` and `Order` records, the immutable `Dataset`
//! snapshot that pairs them, and the paging envelope returned by queries.

pub mod dataset;
pub mod error;
pub mod pagination;
pub mod structs;
pub mod time;

// Re-export the core types to provide a clean public API.
pub use dataset::Dataset;
pub use error::CoreError;
pub use pagination::PagedResult;
pub use structs::{EnrichedOrder, Order, OrderId, Restaurant, RestaurantId};
pub use time::{parse_date, parse_timestamp};
