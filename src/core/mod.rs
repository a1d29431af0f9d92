//! Core conversion logic and shared application plumbing

pub mod amount;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod log;
pub mod rates;
pub mod selection;
pub mod session;

// Re-export main types for cleaner imports
pub use amount::{NormalizedAmount, normalize};
pub use catalog::{AllowList, CurrencyName, filter_supported};
pub use conversion::convert;
pub use rates::{FetchError, RateProvider, RateSnapshot};
pub use selection::SelectionState;
pub use session::Session;
