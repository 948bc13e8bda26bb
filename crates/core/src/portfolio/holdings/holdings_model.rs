use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_ALLOCATION;
use crate::errors::{Result, ValidationError};

fn default_active() -> bool {
    true
}

/// A single position in a portfolio snapshot.
///
/// Holdings arrive from a brokerage sync or a manual edit. Only the sector
/// label, allocation and active flag matter for diversification scoring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text sector or category label (e.g. "Tech", "Intl Bond")
    pub sector: String,

    /// Percentage of the portfolio (0-100). Active allocations are normalized
    /// before scoring, so they need not sum to exactly 100.
    pub allocation: Decimal,

    /// Inactive holdings are ignored by scoring. Defaults to active.
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

impl Holding {
    pub fn new(symbol: &str, sector: &str, allocation: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: None,
            sector: sector.to_string(),
            allocation,
            is_active: true,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Allocation must be a percentage between 0 and 100 inclusive.
    pub fn validate(&self) -> Result<()> {
        if self.allocation < Decimal::ZERO || self.allocation > FULL_ALLOCATION {
            return Err(ValidationError::InvalidInput(format!(
                "Allocation for {} must be between 0 and 100, got {}",
                self.symbol, self.allocation
            ))
            .into());
        }
        Ok(())
    }
}
