//! Current user selection and its derived conversion result

use super::amount::{NormalizedAmount, normalize};
use super::conversion::convert;
use super::rates::RateSnapshot;
use tracing::debug;

/// Base/target pair, amount and snapshot currently in use.
///
/// Every mutation recomputes the conversion result before returning, so `result()`
/// always reflects the current fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    base_code: String,
    target_code: String,
    raw_amount: NormalizedAmount,
    snapshot: Option<RateSnapshot>,
    result: Option<f64>,
}

impl SelectionState {
    pub fn new(base_code: &str, target_code: &str) -> Self {
        SelectionState {
            base_code: base_code.to_string(),
            target_code: target_code.to_string(),
            raw_amount: NormalizedAmount::empty(),
            snapshot: None,
            result: None,
        }
    }

    pub fn base_code(&self) -> &str {
        &self.base_code
    }

    pub fn target_code(&self) -> &str {
        &self.target_code
    }

    pub fn amount(&self) -> &NormalizedAmount {
        &self.raw_amount
    }

    pub fn snapshot(&self) -> Option<&RateSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    pub fn set_base(&mut self, code: &str) {
        self.base_code = code.to_string();
        self.recompute();
    }

    pub fn set_target(&mut self, code: &str) {
        self.target_code = code.to_string();
        self.recompute();
    }

    /// Normalizes raw text before storing it.
    pub fn set_amount(&mut self, raw: &str) {
        self.raw_amount = normalize(raw);
        self.recompute();
    }

    /// Swaps base and target. Amount and snapshot are left as they are.
    pub fn invert(&mut self) {
        let base = std::mem::take(&mut self.base_code);
        let target = std::mem::take(&mut self.target_code);
        self.base_code = target;
        self.target_code = base;
        self.recompute();
    }

    pub fn replace_snapshot(&mut self, snapshot: RateSnapshot) {
        self.snapshot = Some(snapshot);
        self.recompute();
    }

    /// Derives the conversion result from the current fields. Idempotent.
    pub fn recompute(&mut self) -> Option<f64> {
        self.result = convert(
            &self.raw_amount,
            &self.base_code,
            &self.target_code,
            self.snapshot.as_ref(),
        );
        debug!(
            base = %self.base_code,
            target = %self.target_code,
            amount = %self.raw_amount,
            result = ?self.result,
            "Recomputed conversion"
        );
        self.result
    }
}
