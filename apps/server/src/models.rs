use league_core::diversification::{AllocationTier, TargetAllocation};
use league_core::settings::ScoringSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[schema(value_type = f64)]
    pub us_stocks: Decimal,
    #[schema(value_type = f64)]
    pub intl_stocks: Decimal,
    #[schema(value_type = f64)]
    pub us_bonds: Decimal,
    #[schema(value_type = f64)]
    pub intl_bonds: Decimal,
}

impl From<TargetAllocation> for Target {
    fn from(t: TargetAllocation) -> Self {
        Self {
            us_stocks: t.us_stocks,
            intl_stocks: t.intl_stocks,
            us_bonds: t.us_bonds,
            intl_bonds: t.intl_bonds,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub tier: String,
    pub target: Target,
}

impl From<AllocationTier> for Tier {
    fn from(tier: AllocationTier) -> Self {
        Self {
            tier: tier.as_str().to_string(),
            target: tier.target_allocation().into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub default_tier: String,
    pub diversification_enabled: bool,
}

impl From<ScoringSettings> for Settings {
    fn from(s: ScoringSettings) -> Self {
        Self {
            default_tier: s.default_tier.as_str().to_string(),
            diversification_enabled: s.diversification_enabled,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModifierRequest {
    #[schema(value_type = f64)]
    pub deviation: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModifierResponse {
    #[schema(value_type = f64)]
    pub deviation: Decimal,
    #[schema(value_type = f64)]
    pub modifier: Decimal,
}
