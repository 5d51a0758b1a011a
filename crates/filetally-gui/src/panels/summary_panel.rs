/// Summary panel — the scrollable text block with the totals and the
/// per-category extension grids.
use crate::state::AppState;
use egui::Ui;

/// Draw the summary panel (bottom area, shown once results exist).
pub fn summary_panel(ui: &mut Ui, state: &AppState) {
    let report = match state.report {
        Some(ref r) => r,
        None => return,
    };

    ui.heading("Summary");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // A read-only multiline edit keeps the text selectable, like a
            // classic scrolled text area.
            let mut text = report.summary.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
