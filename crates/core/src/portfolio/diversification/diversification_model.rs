//! Diversification result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AssetBucket;

/// Actual vs. target allocation for a single bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAllocation {
    pub bucket: AssetBucket,
    /// Share of active allocation in this bucket (0-100, one decimal)
    pub actual: Decimal,
    /// Target percentage for this bucket
    pub target: Decimal,
    /// Absolute difference in percentage points (one decimal)
    pub deviation: Decimal,
}

/// Diversification breakdown of a portfolio against a target allocation.
///
/// Recomputed on demand from current holdings; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationResult {
    /// Always four entries, in bucket order
    pub buckets: Vec<BucketAllocation>,
    pub worst_deviation: Decimal,
    pub worst_bucket: AssetBucket,
    /// Score multiplier in [0.75, 1.00]
    pub modifier: Decimal,
    /// Distinct active sector labels outside the known vocabulary. These were
    /// scored as US Stocks.
    #[serde(default)]
    pub unclassified_sectors: Vec<String>,
}

impl DiversificationResult {
    pub fn bucket(&self, bucket: AssetBucket) -> Option<&BucketAllocation> {
        self.buckets.iter().find(|b| b.bucket == bucket)
    }

    pub fn total_actual(&self) -> Decimal {
        self.buckets.iter().map(|b| b.actual).sum()
    }
}
