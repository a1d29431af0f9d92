//! Line oriented converter session.
//!
//! Each input line is one user action. The conversion is redrawn after every
//! action that changes the selection.

use super::{convert, currencies, render_load_error, ui};
use crate::core::{RateProvider, Session};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  amount <value>   set the amount to convert (comma or dot as decimal separator)
  from <code>      set the source currency
  to <code>        set the target currency
  invert           swap source and target currencies
  list             show available currencies
  show             show the current conversion
  reload           fetch fresh exchange rates
  help             show this help
  quit             leave the session";

#[derive(Debug, PartialEq)]
enum Action<'a> {
    Amount(&'a str),
    From(&'a str),
    To(&'a str),
    Invert,
    List,
    Show,
    Reload,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_action(line: &str) -> Option<Action<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, a)| (v, a.trim()));

    let action = match verb.to_lowercase().as_str() {
        "amount" | "a" => Action::Amount(arg),
        "from" | "f" if !arg.is_empty() => Action::From(arg),
        "to" | "t" if !arg.is_empty() => Action::To(arg),
        "invert" | "i" => Action::Invert,
        "list" | "l" => Action::List,
        "show" | "s" => Action::Show,
        "reload" | "r" => Action::Reload,
        "help" | "h" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        _ => Action::Unknown(line),
    };
    Some(action)
}

/// Runs the session until `quit` or end of input.
pub async fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    provider: &dyn RateProvider,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "{}",
        ui::style_text("Currency converter", ui::StyleType::Title)
    )?;
    if !render_state(session, output)? {
        writeln!(output, "Type 'reload' to try again or 'quit' to leave.")?;
    }

    for line in input.lines() {
        let line = line?;
        let Some(action) = parse_action(&line) else {
            continue;
        };
        debug!(?action, "Shell action");

        match action {
            Action::Amount(raw) => session.selection_mut().set_amount(raw),
            Action::From(code) => session.selection_mut().set_base(&code.to_uppercase()),
            Action::To(code) => session.selection_mut().set_target(&code.to_uppercase()),
            Action::Invert => session.selection_mut().invert(),
            Action::Show => {}
            Action::List => {
                if session.error().is_none() {
                    writeln!(output, "{}", currencies::display_currencies(session))?;
                }
                continue;
            }
            Action::Reload => {
                let spinner = ui::new_spinner("Loading exchange rates...");
                session.load(provider).await;
                spinner.finish_and_clear();
            }
            Action::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Action::Quit => break,
            Action::Unknown(text) => {
                writeln!(
                    output,
                    "{}",
                    ui::style_text(
                        &format!("Unknown command: {text}. Type 'help' for a list of commands."),
                        ui::StyleType::Error
                    )
                )?;
                continue;
            }
        }

        render_state(session, output)?;
    }

    Ok(())
}

/// Writes either the blocking error screen or the conversion. Returns false on error.
fn render_state<W: Write>(session: &Session, output: &mut W) -> Result<bool> {
    if let Some(error_screen) = render_load_error(session) {
        writeln!(output, "{error_screen}")?;
        return Ok(false);
    }
    writeln!(output, "{}", convert::display_conversion(session))?;
    Ok(true)
}
