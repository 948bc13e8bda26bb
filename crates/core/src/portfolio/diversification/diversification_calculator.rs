//! Diversification calculation: classify, aggregate, compare, map to modifier.
//!
//! Everything here is pure. The same holdings and target always produce the
//! same result, and no input is treated as an error.

use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};

use super::{
    classify_sector_detailed, AssetBucket, BucketAllocation, DiversificationResult,
    TargetAllocation,
};
use crate::constants::{
    ALLOCATION_DECIMAL_PRECISION, FULL_ALLOCATION, MODIFIER_BANDS, MODIFIER_FLOOR,
};
use crate::portfolio::holdings::Holding;

fn round_allocation(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        ALLOCATION_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Percentage of `total` held in `raw`. Saturates instead of overflowing.
fn share_of(raw: Decimal, total: Decimal) -> Decimal {
    match raw.checked_div(total) {
        Some(share) => share.saturating_mul(FULL_ALLOCATION),
        None if raw.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Maps the worst bucket deviation (percentage points) to a score modifier.
///
/// | deviation | modifier |
/// |-----------|----------|
/// | <= 5      | 1.00     |
/// | <= 10     | 0.95     |
/// | <= 15     | 0.90     |
/// | <= 20     | 0.85     |
/// | <= 25     | 0.80     |
/// | > 25      | 0.75     |
pub fn deviation_to_modifier(deviation: Decimal) -> Decimal {
    MODIFIER_BANDS
        .iter()
        .find(|(upper_bound, _)| deviation <= *upper_bound)
        .map(|(_, modifier)| *modifier)
        .unwrap_or(MODIFIER_FLOOR)
}

/// Scores how closely the active holdings match `target`.
///
/// Inactive holdings are ignored. Actual percentages are normalized against
/// the total active allocation, so they sum to 100 (within rounding) unless
/// that total is zero, in which case they are all zero. The worst bucket is
/// the one with the largest deviation; ties go to the bucket declared first.
///
/// Arithmetic saturates, so out-of-range allocations yield extreme numbers
/// rather than a panic. [`crate::scoring::ScoringService`] rejects them up front.
pub fn calculate_diversification(
    holdings: &[Holding],
    target: &TargetAllocation,
) -> DiversificationResult {
    let mut raw = [Decimal::ZERO; 4];
    let mut total_alloc = Decimal::ZERO;
    let mut unclassified_sectors: Vec<String> = Vec::new();
    let mut seen_unclassified: HashSet<String> = HashSet::new();

    for holding in holdings.iter().filter(|h| h.is_active) {
        let classification = classify_sector_detailed(&holding.sector);
        let slot = &mut raw[classification.bucket.index()];
        *slot = slot.saturating_add(holding.allocation);
        total_alloc = total_alloc.saturating_add(holding.allocation);

        if !classification.recognized {
            let label = holding.sector.trim();
            if seen_unclassified.insert(label.to_lowercase()) {
                unclassified_sectors.push(label.to_string());
            }
        }
    }

    let buckets: Vec<BucketAllocation> = AssetBucket::ALL
        .into_iter()
        .map(|bucket| {
            let actual = if total_alloc > Decimal::ZERO {
                round_allocation(share_of(raw[bucket.index()], total_alloc))
            } else {
                Decimal::ZERO
            };
            let target_pct = target.get(bucket);
            BucketAllocation {
                bucket,
                actual,
                target: target_pct,
                deviation: round_allocation(actual.saturating_sub(target_pct).abs()),
            }
        })
        .collect();

    let mut worst_bucket = AssetBucket::UsStocks;
    let mut worst_deviation = Decimal::MIN;
    for allocation in &buckets {
        if allocation.deviation > worst_deviation {
            worst_deviation = allocation.deviation;
            worst_bucket = allocation.bucket;
        }
    }

    DiversificationResult {
        buckets,
        worst_deviation,
        worst_bucket,
        modifier: deviation_to_modifier(worst_deviation),
        unclassified_sectors,
    }
}
