//! Normalization of user-typed amounts

use std::fmt;

/// Amount text that either parses as a finite number or is empty.
///
/// The empty value stands for "no usable amount"; it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAmount(String);

impl NormalizedAmount {
    pub fn empty() -> Self {
        NormalizedAmount(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn value(&self) -> Option<f64> {
        parse_finite(&self.0)
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NormalizedAmount {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts a comma as decimal separator; anything else non-numeric collapses to empty.
///
/// Negative amounts are kept.
pub fn normalize(raw: &str) -> NormalizedAmount {
    let text = raw.replace(',', ".");
    let text = text.trim();
    match parse_finite(text) {
        Some(_) => NormalizedAmount(text.to_string()),
        None => NormalizedAmount::empty(),
    }
}
