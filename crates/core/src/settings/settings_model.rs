use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::portfolio::diversification::AllocationTier;

/// League-wide scoring settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringSettings {
    /// Tier used when a request names neither a tier nor a custom target
    pub default_tier: AllocationTier,
    /// When false, game scores use a neutral 1.00 modifier
    pub diversification_enabled: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            default_tier: AllocationTier::default(),
            diversification_enabled: true,
        }
    }
}

impl ScoringSettings {
    /// Builds settings from raw configuration strings.
    pub fn from_config_values(default_tier: &str, diversification_enabled: &str) -> Result<Self> {
        let default_tier = default_tier.parse::<AllocationTier>().map_err(|_| {
            Error::InvalidConfigValue(format!("default tier '{}'", default_tier))
        })?;
        let diversification_enabled = parse_bool(diversification_enabled).ok_or_else(|| {
            Error::InvalidConfigValue(format!(
                "diversification enabled flag '{}'",
                diversification_enabled
            ))
        })?;
        Ok(Self {
            default_tier,
            diversification_enabled,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ScoringSettings::default();
        assert_eq!(settings.default_tier, AllocationTier::Moderate);
        assert!(settings.diversification_enabled);
    }

    #[test]
    fn test_from_config_values() {
        let settings = ScoringSettings::from_config_values("Aggressive", "off").unwrap();
        assert_eq!(settings.default_tier, AllocationTier::Aggressive);
        assert!(!settings.diversification_enabled);
    }

    #[test]
    fn test_from_config_values_rejects_garbage() {
        assert!(matches!(
            ScoringSettings::from_config_values("reckless", "true"),
            Err(Error::InvalidConfigValue(_))
        ));
        assert!(matches!(
            ScoringSettings::from_config_values("moderate", "maybe"),
            Err(Error::InvalidConfigValue(_))
        ));
    }
}
