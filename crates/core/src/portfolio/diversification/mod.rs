//! Diversification scoring: bucket classification, target allocations and
//! the modifier derived from the worst bucket deviation.

mod asset_bucket;
mod diversification_calculator;
mod diversification_model;
mod target_allocation;

pub use asset_bucket::{
    classify_sector, classify_sector_detailed, AssetBucket, SectorClassification,
};
pub use diversification_calculator::{calculate_diversification, deviation_to_modifier};
pub use diversification_model::{BucketAllocation, DiversificationResult};
pub use target_allocation::{AllocationTier, TargetAllocation};
