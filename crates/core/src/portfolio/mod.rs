//! Portfolio domain: holdings and diversification scoring.

pub mod diversification;
pub mod holdings;
