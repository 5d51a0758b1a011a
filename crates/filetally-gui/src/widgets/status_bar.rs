/// Bottom status bar — scan status and result totals.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use filetally_core::analysis::format_count;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                if let Some(ref err) = state.scan_error {
                    ui.label(
                        egui::RichText::new(format!("⚠ {err}"))
                            .size(12.0)
                            .color(color_warning),
                    );
                } else {
                    ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
                }
            }
            AppPhase::Scanning => {
                ui.spinner();

                let display_path = truncate_path(state.path_input.trim(), 60);
                ui.label(
                    egui::RichText::new(format!("Scanning {}...", display_path))
                        .size(12.0)
                        .color(color_normal),
                );
            }
            AppPhase::Results => {
                if let Some(ref report) = state.report {
                    ui.label(
                        egui::RichText::new("✓ Scan complete")
                            .size(12.0)
                            .color(color_success),
                    );

                    ui.separator();

                    ui.label(
                        egui::RichText::new(format!(
                            "{} folders",
                            format_count(report.result.folder_count)
                        ))
                        .size(12.0)
                        .color(color_normal),
                    );

                    ui.separator();

                    ui.label(
                        egui::RichText::new(format!(
                            "{} files",
                            format_count(report.result.file_count)
                        ))
                        .size(12.0)
                        .color(color_accent),
                    );

                    if let Some(duration) = state.scan_duration {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                                .size(12.0)
                                .color(color_weak),
                        );
                    }

                    if !report.result.unreadable.is_empty() {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} skipped",
                                format_count(report.result.unreadable.len() as u64)
                            ))
                            .size(12.0)
                            .color(color_warning),
                        );
                    }
                }
            }
        }
    });
}

/// Truncate a path string to fit within `max_len` characters,
/// replacing the middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}
