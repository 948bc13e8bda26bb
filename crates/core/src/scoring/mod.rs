//! Weekly game scoring: applies the diversification modifier to portfolio
//! growth and settles head-to-head matchups.

mod scoring_model;
mod scoring_service;
mod scoring_traits;

pub use scoring_model::*;
pub use scoring_service::ScoringService;
pub use scoring_traits::ScoringServiceTrait;
