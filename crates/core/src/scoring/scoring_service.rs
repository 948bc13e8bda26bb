use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, NEUTRAL_MODIFIER};
use crate::errors::Result;
use crate::portfolio::diversification::{
    calculate_diversification, AllocationTier, DiversificationResult, TargetAllocation,
};
use crate::portfolio::holdings::Holding;
use crate::settings::ScoringSettings;

use super::{
    DiversificationRequest, MatchupOutcome, MatchupRequest, MatchupResult, PortfolioScore,
    PortfolioScoreRequest, ScoringServiceTrait,
};

/// Turns holdings and weekly growth into game scores.
pub struct ScoringService {
    settings: ScoringSettings,
}

impl ScoringService {
    pub fn new(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    /// Picks the target to score against: a custom target (validated) wins,
    /// then the requested tier, then the league default tier.
    fn resolve_target(
        &self,
        tier: Option<AllocationTier>,
        target: Option<&TargetAllocation>,
    ) -> Result<(Option<AllocationTier>, TargetAllocation)> {
        match (target, tier) {
            (Some(custom), _) => {
                custom.validate()?;
                Ok((None, *custom))
            }
            (None, Some(tier)) => Ok((Some(tier), tier.target_allocation())),
            (None, None) => {
                let tier = self.settings.default_tier;
                Ok((Some(tier), tier.target_allocation()))
            }
        }
    }

    fn validate_holdings(holdings: &[Holding]) -> Result<()> {
        holdings.iter().try_for_each(Holding::validate)
    }

    fn score(
        &self,
        holdings: &[Holding],
        raw_growth_pct: Decimal,
        tier: Option<AllocationTier>,
        target: TargetAllocation,
    ) -> PortfolioScore {
        let diversification = calculate_diversification(holdings, &target);
        let modifier = if self.settings.diversification_enabled {
            diversification.modifier
        } else {
            NEUTRAL_MODIFIER
        };
        let game_score = (raw_growth_pct * modifier).round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );

        PortfolioScore {
            raw_growth_pct,
            modifier,
            game_score,
            tier,
            target,
            diversification,
        }
    }
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new(ScoringSettings::default())
    }
}

impl ScoringServiceTrait for ScoringService {
    fn settings(&self) -> ScoringSettings {
        self.settings
    }

    fn calculate_diversification(
        &self,
        request: &DiversificationRequest,
    ) -> Result<DiversificationResult> {
        Self::validate_holdings(&request.holdings)?;
        let (_, target) = self.resolve_target(request.tier, request.target.as_ref())?;
        Ok(calculate_diversification(&request.holdings, &target))
    }

    fn score_portfolio(&self, request: &PortfolioScoreRequest) -> Result<PortfolioScore> {
        Self::validate_holdings(&request.holdings)?;
        let (tier, target) = self.resolve_target(request.tier, request.target.as_ref())?;
        let score = self.score(&request.holdings, request.raw_growth_pct, tier, target);
        debug!(
            "Scored portfolio of {} holdings: growth {} x modifier {} = {}",
            request.holdings.len(),
            score.raw_growth_pct,
            score.modifier,
            score.game_score
        );
        Ok(score)
    }

    fn score_matchup(&self, request: &MatchupRequest) -> Result<MatchupResult> {
        Self::validate_holdings(&request.home.holdings)?;
        Self::validate_holdings(&request.away.holdings)?;
        let (tier, target) = self.resolve_target(request.tier, request.target.as_ref())?;
        let home = self.score(
            &request.home.holdings,
            request.home.raw_growth_pct,
            tier,
            target,
        );
        let away = self.score(
            &request.away.holdings,
            request.away.raw_growth_pct,
            tier,
            target,
        );

        let outcome = MatchupOutcome::decide(home.game_score, away.game_score);
        let margin = home.game_score.saturating_sub(away.game_score).abs();
        debug!(
            "Matchup {} vs {}: {} vs {} -> {:?}",
            request.home.member_name.as_deref().unwrap_or("home"),
            request.away.member_name.as_deref().unwrap_or("away"),
            home.game_score,
            away.game_score,
            outcome
        );

        Ok(MatchupResult {
            home,
            away,
            outcome,
            margin,
        })
    }
}
