/// Main `eframe::App` implementation for FileTally.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that startup
/// work (argument handling, kicking off a requested scan) completes before
/// the OS window is created and the first rendered frame arrives
/// immediately.
pub struct FileTallyState {
    pub(crate) inner: AppState,
}

impl FileTallyState {
    /// Build initial state. `initial_path`, when given, pre-fills the
    /// path box and starts the scan immediately.
    pub fn build(initial_path: Option<std::path::PathBuf>) -> Self {
        let mut state = AppState::new();
        if let Some(path) = initial_path {
            state.path_input = path.to_string_lossy().into_owned();
            state.start_scan(path);
        }
        Self { inner: state }
    }
}

/// The FileTally application.
pub struct FileTallyApp {
    state: AppState,
}

impl FileTallyApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`FileTallyState::build()`]
    /// *before* `eframe::run_native` is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: FileTallyState) -> Self {
        // Apply initial dark visuals.
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state: state.inner }
    }
}

impl eframe::App for FileTallyApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling dark_mode takes effect
        // immediately on the next rendered frame.
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Process the background scan's terminal message ────────────────
        let _data_changed = self.state.process_scan_messages();

        // Request continuous repaint while scanning: the completion message
        // arrives outside egui's event stream.
        if self.state.phase == AppPhase::Scanning {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About FileTally")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🗂 FileTally")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Folder statistics at a glance.\n\
                             Scans a directory tree and tallies folders and\n\
                             files, grouped by extension category.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Summary panel (totals + category grids) ───────────────────────
        if self.state.report.is_some() {
            egui::TopBottomPanel::bottom("summary_panel")
                .resizable(true)
                .default_height(240.0)
                .min_height(120.0)
                .max_height(500.0)
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    panels::summary_panel::summary_panel(ui, &self.state);
                    ui.add_space(4.0);
                });
        }

        // ── Central panel (tree view) ─────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tree_panel::tree_panel(ui, &mut self.state);
        });
    }
}
