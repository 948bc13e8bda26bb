//! Request and result models for game scoring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::diversification::{AllocationTier, DiversificationResult, TargetAllocation};
use crate::portfolio::holdings::Holding;

/// Holdings to score, with an optional tier or custom target.
/// A custom target wins over a tier; with neither, the league default applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationRequest {
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub tier: Option<AllocationTier>,
    #[serde(default)]
    pub target: Option<TargetAllocation>,
}

/// A portfolio's weekly growth to be turned into a game score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioScoreRequest {
    pub holdings: Vec<Holding>,
    /// Raw weekly growth in percent (e.g. 2.5 for +2.5%)
    pub raw_growth_pct: Decimal,
    #[serde(default)]
    pub tier: Option<AllocationTier>,
    #[serde(default)]
    pub target: Option<TargetAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioScore {
    pub raw_growth_pct: Decimal,
    /// Modifier actually applied (1.00 when diversification is disabled)
    pub modifier: Decimal,
    /// raw_growth_pct * modifier, two decimals
    pub game_score: Decimal,
    /// Tier used, or None when a custom target was supplied
    pub tier: Option<AllocationTier>,
    pub target: TargetAllocation,
    pub diversification: DiversificationResult,
}

/// One side of a head-to-head matchup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSide {
    #[serde(default)]
    pub member_name: Option<String>,
    pub holdings: Vec<Holding>,
    pub raw_growth_pct: Decimal,
}

/// Both sides of a matchup are scored against the same target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupRequest {
    pub home: MatchupSide,
    pub away: MatchupSide,
    #[serde(default)]
    pub tier: Option<AllocationTier>,
    #[serde(default)]
    pub target: Option<TargetAllocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchupOutcome {
    HomeWin,
    AwayWin,
    Tie,
}

impl MatchupOutcome {
    /// Higher game score wins; equal scores tie.
    pub fn decide(home_score: Decimal, away_score: Decimal) -> Self {
        match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => MatchupOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchupOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchupOutcome::Tie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupResult {
    pub home: PortfolioScore,
    pub away: PortfolioScore,
    pub outcome: MatchupOutcome,
    /// Absolute difference between game scores
    pub margin: Decimal,
}
