//! FileTally — folder and file statistics in a desktop window.
//!
//! Thin binary entry point. All logic lives in the `filetally-core`
//! and `filetally-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FileTally starting");

    // Optional directory argument: pre-fills the path box and starts the
    // scan immediately, so `FileTally ~/Documents` goes straight to work.
    let initial_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    let icon = filetally_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the first
    // rendered frame arrives immediately and the OS never fills the window
    // with its default white background.
    let state = filetally_gui::FileTallyState::build(initial_path);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FileTally -- Folder Statistics")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "FileTally",
        options,
        Box::new(|cc| Ok(Box::new(filetally_gui::FileTallyApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
