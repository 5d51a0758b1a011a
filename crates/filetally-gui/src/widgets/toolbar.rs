/// Top action bar -- path entry, scan control, theme toggle, and branding.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts
        // to dark and light mode automatically.
        ui.label(
            egui::RichText::new("🗂 FileTally")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Path entry. Enter submits, same as the Scan button.
        ui.label("Folder:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .desired_width(360.0)
                .hint_text("Path of the folder to scan"),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        // Scan button. No Stop counterpart: the walk is one blocking unit
        // of work on its thread.
        let can_scan = state.phase != AppPhase::Scanning && !state.path_input.trim().is_empty();
        let scan_btn = ui.add_enabled(
            can_scan,
            egui::Button::new("▶ Scan").min_size(egui::vec2(70.0, 28.0)),
        );
        if can_scan && (scan_btn.clicked() || submitted) {
            let path = std::path::PathBuf::from(state.path_input.trim());
            state.start_scan(path);
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About FileTally").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}
