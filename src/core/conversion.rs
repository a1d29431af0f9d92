//! Cross-rate conversion over a pivot-relative snapshot

use super::amount::NormalizedAmount;
use super::rates::RateSnapshot;

/// Converts `amount` from `base` to `target`.
///
/// Rates are pivot-relative, so the pair rate is always `rate(target) / rate(base)`.
/// Returns `None` whenever there is nothing to show: empty or non-numeric amount,
/// no snapshot yet, or a code missing from the snapshot.
pub fn convert(
    amount: &NormalizedAmount,
    base: &str,
    target: &str,
    snapshot: Option<&RateSnapshot>,
) -> Option<f64> {
    let value = amount.value()?;
    let snapshot = snapshot?;
    let base_rate = snapshot.rate(base)?;
    let target_rate = snapshot.rate(target)?;

    let cross_rate = target_rate / base_rate;
    let result = value * cross_rate;
    result.is_finite().then_some(result)
}
