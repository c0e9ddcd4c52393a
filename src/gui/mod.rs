mod app;
mod dialogs;
mod surface;
mod themes;

pub use app::EditorApp;

use crate::core::session::{Session, SESSION_FILE};
use anyhow::{anyhow, Context as _};
use std::path::Path;

/// Entry point for the editor window.
pub fn run() -> anyhow::Result<()> {
    // Session restore happens before the first frame. A present but broken
    // session file is a startup failure, not something to paper over.
    let theme_name = match Session::restore_from(Path::new(SESSION_FILE))
        .with_context(|| format!("failed to restore {}", SESSION_FILE))?
    {
        Some(session) => session.theme,
        None => themes::DEFAULT_NAME.to_string(),
    };

    let theme = themes::by_name(&theme_name)
        .ok_or_else(|| anyhow!("unknown theme {:?} in {}", theme_name, SESSION_FILE))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        "Editor",
        options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, theme)))),
    )
    .map_err(|e| anyhow!("{}", e))
}
