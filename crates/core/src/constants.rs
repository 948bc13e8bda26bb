use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places kept for actual and deviation percentages
pub const ALLOCATION_DECIMAL_PRECISION: u32 = 1;

/// Decimal places kept for game scores
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Total a target allocation must add up to
pub const FULL_ALLOCATION: Decimal = dec!(100);

/// Modifier bands as (inclusive upper deviation bound, modifier), ascending
pub const MODIFIER_BANDS: [(Decimal, Decimal); 5] = [
    (dec!(5), dec!(1.00)),
    (dec!(10), dec!(0.95)),
    (dec!(15), dec!(0.90)),
    (dec!(20), dec!(0.85)),
    (dec!(25), dec!(0.80)),
];

/// Modifier applied past the last band
pub const MODIFIER_FLOOR: Decimal = dec!(0.75);

/// Modifier applied when diversification scoring is switched off
pub const NEUTRAL_MODIFIER: Decimal = dec!(1.00);
