use super::ui;
use crate::core::Session;
use comfy_table::Cell;

/// Table of selectable currencies with their rate against the pivot.
pub fn display_currencies(session: &Session) -> String {
    let snapshot = session.selection().snapshot();
    let pivot = snapshot.map_or("pivot", |s| s.pivot_code());

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Per 1 {pivot}")),
    ]);

    for code in session.currencies() {
        let name = session.display_name(code).unwrap_or_default();
        let rate = snapshot.and_then(|s| s.rate(code));
        table.add_row(vec![
            Cell::new(code),
            Cell::new(name),
            ui::format_optional_cell(rate, |r| format!("{r:.4}")),
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Available currencies", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());

    if let Some(snapshot) = snapshot {
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!(
                    "Values are based on exchange rates from {}",
                    ui::format_snapshot_time(snapshot)
                ),
                ui::StyleType::Subtle
            )
        ));
    }

    output
}
