pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Currencies,
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
        invert: bool,
    },
    Shell,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!(
        base_url = %config.provider.base_url,
        pivot = %config.pivot,
        currencies = config.currencies.len(),
        "Loaded config"
    );

    let provider = providers::ExchangeRateApiProvider::new(
        &config.provider.base_url,
        &config.provider.api_key,
        &config.pivot,
    );
    let mut session = cli::load_session(&config, &provider).await;

    match command {
        AppCommand::Shell => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            cli::shell::run_shell(&mut session, &provider, stdin.lock(), &mut stdout).await
        }
        AppCommand::Currencies => {
            if let Some(error_screen) = cli::render_load_error(&session) {
                eprintln!("{error_screen}");
                anyhow::bail!("Exchange rates unavailable");
            }
            println!("{}", cli::currencies::display_currencies(&session));
            Ok(())
        }
        AppCommand::Convert {
            amount,
            from,
            to,
            invert,
        } => {
            if let Some(error_screen) = cli::render_load_error(&session) {
                eprintln!("{error_screen}");
                anyhow::bail!("Exchange rates unavailable");
            }
            cli::convert::apply_arguments(
                &mut session,
                &amount,
                from.as_deref(),
                to.as_deref(),
                invert,
            );
            println!("{}", cli::convert::display_conversion(&session));
            Ok(())
        }
    }
}
