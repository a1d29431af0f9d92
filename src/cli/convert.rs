use super::ui;
use crate::core::{SelectionState, Session};

/// Renders the current conversion, or a note that there is nothing to show.
pub fn display_conversion(session: &Session) -> String {
    let selection = session.selection();
    let base = selection.base_code();
    let target = selection.target_code();

    let mut output = String::new();
    if let Some(snapshot) = selection.snapshot() {
        output.push_str(&ui::style_text(
            &format!("Rates as of {}", ui::format_snapshot_time(snapshot)),
            ui::StyleType::Subtle,
        ));
        output.push('\n');
    }

    match selection.result() {
        Some(value) => output.push_str(&format!(
            "{} {} = {} {}",
            selection.amount(),
            ui::style_text(base, ui::StyleType::Label),
            ui::style_text(&ui::format_amount(value), ui::StyleType::Result),
            ui::style_text(target, ui::StyleType::Label),
        )),
        None => output.push_str(&ui::style_text(
            &nothing_to_show(session, selection),
            ui::StyleType::Subtle,
        )),
    }

    output
}

fn nothing_to_show(session: &Session, selection: &SelectionState) -> String {
    let unknown: Vec<&str> = [selection.base_code(), selection.target_code()]
        .into_iter()
        .filter(|code| !session.currencies().iter().any(|c| c == code))
        .collect();

    if selection.amount().is_empty() {
        "Nothing to show: enter an amount".to_string()
    } else if !unknown.is_empty() {
        format!("Nothing to show: {} not available", unknown.join(", "))
    } else {
        "Nothing to show".to_string()
    }
}

/// Applies one-shot conversion arguments to the session selection.
pub fn apply_arguments(
    session: &mut Session,
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
    invert: bool,
) {
    let selection = session.selection_mut();
    if let Some(code) = from {
        selection.set_base(&code.to_uppercase());
    }
    if let Some(code) = to {
        selection.set_target(&code.to_uppercase());
    }
    if invert {
        selection.invert();
    }
    selection.set_amount(amount);
}
