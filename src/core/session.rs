//! Observable converter state for a presentation layer

use super::catalog::{AllowList, filter_supported};
use super::rates::RateProvider;
use super::selection::SelectionState;
use tracing::{error, info, instrument};

/// Everything a front end needs to render the converter.
///
/// Starts out loading. A failed load leaves `error` set and `currencies` empty
/// until the caller loads again.
#[derive(Debug, Clone)]
pub struct Session {
    allow_list: AllowList,
    loading: bool,
    error: Option<String>,
    currencies: Vec<String>,
    date: Option<String>,
    selection: SelectionState,
}

impl Session {
    pub fn new(allow_list: AllowList, base_code: &str, target_code: &str) -> Self {
        Session {
            allow_list,
            loading: true,
            error: None,
            currencies: Vec::new(),
            date: None,
            selection: SelectionState::new(base_code, target_code),
        }
    }

    /// Fetches a fresh snapshot once and updates the observable state.
    #[instrument(name = "SessionLoad", skip_all)]
    pub async fn load(&mut self, provider: &dyn RateProvider) {
        self.loading = true;
        match provider.fetch_snapshot().await {
            Ok(snapshot) => {
                self.currencies = filter_supported(snapshot.rates(), &self.allow_list);
                self.date = Some(snapshot.fetched_at().to_string());
                info!(
                    pivot = snapshot.pivot_code(),
                    currencies = self.currencies.len(),
                    "Loaded rate snapshot"
                );
                self.selection.replace_snapshot(snapshot);
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "Failed to load exchange rates");
                self.currencies.clear();
                self.date = None;
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.allow_list.name_of(code)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }
}
