//! Selectable currencies: the allow-list and its intersection with a snapshot

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CurrencyName {
    pub code: String,
    pub name: String,
}

/// Ordered set of currencies a user may pick, with their display names.
///
/// Definition order is significant: catalogs derived from it keep this order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AllowList(Vec<CurrencyName>);

impl AllowList {
    pub fn new(entries: Vec<CurrencyName>) -> Self {
        AllowList(entries)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        AllowList(
            pairs
                .iter()
                .map(|(code, name)| CurrencyName {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.name_of(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList::from_pairs(&[
            ("USD", "US Dollar"),
            ("EUR", "Euro"),
            ("GBP", "Pound Sterling"),
            ("JPY", "Japanese Yen"),
            ("AUD", "Australian Dollar"),
            ("CAD", "Canadian Dollar"),
            ("CHF", "Swiss Franc"),
            ("CNY", "Chinese Yuan"),
            ("SEK", "Swedish Krona"),
            ("NZD", "New Zealand Dollar"),
            ("BRL", "Brazilian Real"),
        ])
    }
}

/// Codes present both in the snapshot and in the allow-list, in allow-list order.
///
/// A code listed more than once is kept at its first position.
pub fn filter_supported<V>(rates: &HashMap<String, V>, allow_list: &AllowList) -> Vec<String> {
    let mut seen = HashSet::new();
    allow_list
        .codes()
        .filter(|code| rates.contains_key(*code) && seen.insert(*code))
        .map(str::to_string)
        .collect()
}
