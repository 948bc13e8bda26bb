use crate::errors::Result;
use crate::portfolio::diversification::DiversificationResult;
use crate::settings::ScoringSettings;

use super::{
    DiversificationRequest, MatchupRequest, MatchupResult, PortfolioScore, PortfolioScoreRequest,
};

/// Trait for the game scoring service.
pub trait ScoringServiceTrait: Send + Sync {
    /// Active league scoring settings.
    fn settings(&self) -> ScoringSettings;

    /// Diversification breakdown for a set of holdings.
    fn calculate_diversification(
        &self,
        request: &DiversificationRequest,
    ) -> Result<DiversificationResult>;

    /// Applies the diversification modifier to a portfolio's weekly growth.
    fn score_portfolio(&self, request: &PortfolioScoreRequest) -> Result<PortfolioScore>;

    /// Scores both sides of a matchup and decides the winner.
    fn score_matchup(&self, request: &MatchupRequest) -> Result<MatchupResult>;
}
