pub mod convert;
pub mod currencies;
pub mod setup;
pub mod shell;
pub mod ui;

use crate::core::config::AppConfig;
use crate::core::{RateProvider, Session};

/// Builds a session from config and performs the initial fetch behind a spinner.
pub async fn load_session(config: &AppConfig, provider: &dyn RateProvider) -> Session {
    let mut session = Session::new(config.currencies.clone(), &config.base, &config.target);

    let spinner = ui::new_spinner("Loading exchange rates...");
    session.load(provider).await;
    spinner.finish_and_clear();

    session
}

/// Blocking error screen shown when rates could not be loaded.
pub fn render_load_error(session: &Session) -> Option<String> {
    session.error().map(|err| {
        format!(
            "{}\n{}",
            ui::style_text(
                "Failed to load exchange rates. Try again later.",
                ui::StyleType::Error
            ),
            ui::style_text(err, ui::StyleType::Subtle)
        )
    })
}
