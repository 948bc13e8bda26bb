//! Asset buckets and sector label classification.
//!
//! Every holding lands in exactly one of four buckets based on its sector
//! label. Matching is exact after trimming and lowercasing: `"Bond"` is a US
//! bond, `"bond fund"` is not. Labels that match nothing fall into
//! [`AssetBucket::UsStocks`].

use std::fmt;

use serde::{Deserialize, Serialize};

const INTL_STOCK_LABELS: &[&str] = &[
    "international",
    "international stock",
    "international stocks",
    "intl",
    "intl stock",
    "intl stocks",
];

const INTL_BOND_LABELS: &[&str] = &[
    "intl bond",
    "intl bonds",
    "international bond",
    "international bonds",
];

const US_BOND_LABELS: &[&str] = &["us bond", "us bonds", "bonds", "bond"];

/// Labels known to belong in the US stocks bucket. Only used to tell a
/// deliberate default apart from an unrecognized label.
const US_STOCK_LABELS: &[&str] = &[
    "us stock",
    "us stocks",
    "stock",
    "stocks",
    "equity",
    "equities",
    "tech",
    "technology",
    "healthcare",
    "energy",
    "financials",
    "consumer",
    "index",
    "etf",
    "index/etf",
    "real estate",
    "crypto",
    "industrials",
    "utilities",
    "materials",
    "communications",
];

/// One of the four asset classes used for diversification scoring.
///
/// Declaration order matters: it is the iteration order of [`AssetBucket::ALL`]
/// and decides ties when picking the worst deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetBucket {
    #[serde(rename = "US Stocks")]
    UsStocks,
    #[serde(rename = "Intl Stocks")]
    IntlStocks,
    #[serde(rename = "US Bonds")]
    UsBonds,
    #[serde(rename = "Intl Bonds")]
    IntlBonds,
}

impl AssetBucket {
    pub const ALL: [AssetBucket; 4] = [
        AssetBucket::UsStocks,
        AssetBucket::IntlStocks,
        AssetBucket::UsBonds,
        AssetBucket::IntlBonds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetBucket::UsStocks => "US Stocks",
            AssetBucket::IntlStocks => "Intl Stocks",
            AssetBucket::UsBonds => "US Bonds",
            AssetBucket::IntlBonds => "Intl Bonds",
        }
    }

    /// Position in [`AssetBucket::ALL`].
    pub fn index(&self) -> usize {
        match self {
            AssetBucket::UsStocks => 0,
            AssetBucket::IntlStocks => 1,
            AssetBucket::UsBonds => 2,
            AssetBucket::IntlBonds => 3,
        }
    }
}

impl fmt::Display for AssetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a sector label, with a flag telling whether the
/// label belongs to the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorClassification {
    pub bucket: AssetBucket,
    pub recognized: bool,
}

/// Maps a free-text sector label to its bucket.
///
/// Rules are checked in order, first match wins:
/// 1. international stock variants -> Intl Stocks
/// 2. international bond variants -> Intl Bonds
/// 3. US bond variants -> US Bonds
/// 4. anything else -> US Stocks
pub fn classify_sector(label: &str) -> AssetBucket {
    classify_sector_detailed(label).bucket
}

/// Same as [`classify_sector`], also reporting whether the label was known.
pub fn classify_sector_detailed(label: &str) -> SectorClassification {
    let normalized = label.trim().to_lowercase();
    let key = normalized.as_str();

    let matched = if INTL_STOCK_LABELS.contains(&key) {
        Some(AssetBucket::IntlStocks)
    } else if INTL_BOND_LABELS.contains(&key) {
        Some(AssetBucket::IntlBonds)
    } else if US_BOND_LABELS.contains(&key) {
        Some(AssetBucket::UsBonds)
    } else {
        None
    };

    match matched {
        Some(bucket) => SectorClassification {
            bucket,
            recognized: true,
        },
        None => SectorClassification {
            bucket: AssetBucket::UsStocks,
            recognized: US_STOCK_LABELS.contains(&key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_stock_variants() {
        for label in ["International", "INTL STOCK", "intl stocks", "  international  "] {
            assert_eq!(classify_sector(label), AssetBucket::IntlStocks, "{label}");
        }
    }

    #[test]
    fn test_international_bond_variants() {
        for label in ["Intl Bond", "international bonds", "INTERNATIONAL BOND"] {
            assert_eq!(classify_sector(label), AssetBucket::IntlBonds, "{label}");
        }
    }

    #[test]
    fn test_us_bond_variants() {
        for label in ["Bond", "bonds", "US Bond", "us bonds"] {
            assert_eq!(classify_sector(label), AssetBucket::UsBonds, "{label}");
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(classify_sector("bond fund"), AssetBucket::UsStocks);
        assert_eq!(classify_sector("international equity"), AssetBucket::UsStocks);
        assert_eq!(classify_sector("Treasury Bonds"), AssetBucket::UsStocks);
    }

    #[test]
    fn test_common_sectors_default_to_us_stocks() {
        for label in [
            "Tech",
            "Healthcare",
            "Energy",
            "Financials",
            "Consumer",
            "Index/ETF",
            "Real Estate",
            "Crypto",
            "Industrials",
            "",
        ] {
            assert_eq!(classify_sector(label), AssetBucket::UsStocks, "{label}");
        }
    }

    #[test]
    fn test_recognized_flag() {
        assert!(classify_sector_detailed("Tech").recognized);
        assert!(classify_sector_detailed("Intl Bond").recognized);

        let unknown = classify_sector_detailed("Space Mining");
        assert_eq!(unknown.bucket, AssetBucket::UsStocks);
        assert!(!unknown.recognized);

        assert!(!classify_sector_detailed("bond fund").recognized);
    }

    #[test]
    fn test_bucket_order_and_names() {
        let names: Vec<&str> = AssetBucket::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(names, ["US Stocks", "Intl Stocks", "US Bonds", "Intl Bonds"]);
        for (i, bucket) in AssetBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
        assert_eq!(
            serde_json::to_string(&AssetBucket::IntlBonds).unwrap(),
            "\"Intl Bonds\""
        );
    }
}
