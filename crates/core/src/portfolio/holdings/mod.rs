//! Portfolio holdings as seen by the scoring engine.

mod holdings_model;

pub use holdings_model::Holding;
