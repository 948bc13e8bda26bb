//! Target allocations and the tier presets a league can choose from.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::AssetBucket;
use crate::constants::FULL_ALLOCATION;
use crate::errors::{Error, Result, ValidationError};

/// Ideal percentage per bucket. The four values sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAllocation {
    pub us_stocks: Decimal,
    pub intl_stocks: Decimal,
    pub us_bonds: Decimal,
    pub intl_bonds: Decimal,
}

impl TargetAllocation {
    /// Builds a validated target. Every value must be within 0-100 and the
    /// four must add up to exactly 100.
    pub fn new(
        us_stocks: Decimal,
        intl_stocks: Decimal,
        us_bonds: Decimal,
        intl_bonds: Decimal,
    ) -> Result<Self> {
        let target = Self {
            us_stocks,
            intl_stocks,
            us_bonds,
            intl_bonds,
        };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> Result<()> {
        for (bucket, value) in self.iter() {
            if value < Decimal::ZERO || value > FULL_ALLOCATION {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Target for {} must be between 0 and 100, got {}",
                    bucket, value
                ))));
            }
        }

        let total: Decimal = self.iter().map(|(_, value)| value).sum();
        if total != FULL_ALLOCATION {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Target allocation must sum to 100, got {}",
                total
            ))));
        }
        Ok(())
    }

    pub fn get(&self, bucket: AssetBucket) -> Decimal {
        match bucket {
            AssetBucket::UsStocks => self.us_stocks,
            AssetBucket::IntlStocks => self.intl_stocks,
            AssetBucket::UsBonds => self.us_bonds,
            AssetBucket::IntlBonds => self.intl_bonds,
        }
    }

    /// Bucket/target pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetBucket, Decimal)> + '_ {
        AssetBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }
}

impl Default for TargetAllocation {
    fn default() -> Self {
        AllocationTier::default().target_allocation()
    }
}

/// Named target-allocation preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationTier {
    Cautious,
    #[default]
    Moderate,
    Aggressive,
}

impl AllocationTier {
    pub fn all() -> [AllocationTier; 3] {
        [
            AllocationTier::Cautious,
            AllocationTier::Moderate,
            AllocationTier::Aggressive,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationTier::Cautious => "cautious",
            AllocationTier::Moderate => "moderate",
            AllocationTier::Aggressive => "aggressive",
        }
    }

    /// The fixed split for this tier (US Stocks / Intl Stocks / US Bonds / Intl Bonds).
    pub fn target_allocation(&self) -> TargetAllocation {
        let (us_stocks, intl_stocks, us_bonds, intl_bonds) = match self {
            AllocationTier::Cautious => (dec!(30), dec!(15), dec!(40), dec!(15)),
            AllocationTier::Moderate => (dec!(45), dec!(25), dec!(20), dec!(10)),
            AllocationTier::Aggressive => (dec!(60), dec!(30), dec!(7), dec!(3)),
        };
        TargetAllocation {
            us_stocks,
            intl_stocks,
            us_bonds,
            intl_bonds,
        }
    }
}

impl fmt::Display for AllocationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationTier {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cautious" => Ok(AllocationTier::Cautious),
            "moderate" => Ok(AllocationTier::Moderate),
            "aggressive" => Ok(AllocationTier::Aggressive),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown allocation tier: {}",
                other
            )))),
        }
    }
}
