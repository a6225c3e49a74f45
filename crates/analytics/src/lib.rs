//! # Platter Analytics Engine
//!
//! This crate turns a raw order collection plus query parameters into the
//! answers the service hands out: directory pages, per-day trend series,
//! revenue leaderboards and filtered order listings.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files
//!   or HTTP. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every component is a stateless calculator over an
//!   immutable `Dataset` that is passed in explicitly. Nothing is cached or
//!   mutated, so concurrent queries need no coordination.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The facade exposing the four query operations.
//! - `DateWindow`: A validated, inclusive range of calendar days.
//! - `RestaurantDirectory`, `OrderIndex`, `OrderTrendAnalyzer`,
//!   `TopRestaurantRanker`, `OrderFilterEngine`: the individual components.
//! - `DailyMetric`, `TrendReport`, `RestaurantStat`: the result records.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod directory;
pub mod engine;
pub mod error;
pub mod filter;
pub mod index;
pub mod ranking;
pub mod report;
pub mod trends;
pub mod window;

// Re-export the key components to create a clean, public-facing API.
pub use directory::{DirectoryQuery, RestaurantDirectory, SortDirection, SortField};
pub use engine::{AnalyticsEngine, QueryLimits};
pub use error::AnalyticsError;
pub use filter::{OrderCriteria, OrderFilterEngine};
pub use index::OrderIndex;
pub use ranking::TopRestaurantRanker;
pub use report::{DailyMetric, RestaurantStat, TrendReport};
pub use trends::OrderTrendAnalyzer;
pub use window::DateWindow;
