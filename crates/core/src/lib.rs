//! League Core - diversification scoring for a fantasy investing league.
//!
//! Holdings are classified into four asset buckets, compared against a
//! target allocation, and the worst deviation becomes a penalty-only
//! multiplier on a portfolio's weekly growth. All calculations are pure.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod scoring;
pub mod settings;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
