mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use app::GridlightApp;
use eframe::egui;
use state::AppState;

/// Dataset read at startup when no path is given on the command line.
const DEFAULT_DATA_FILE: &str = "acesso_eletricidade_limpo.csv";

/// Decorative sidebar branding. Optional: absence is tolerated.
const BRANDING_IMAGE: &str = "assets/logo.png";

fn main() -> eframe::Result {
    env_logger::init();

    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gridlight – Electricity Access",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the branding png.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut state = AppState::default();

            // The dataset is loaded exactly once; the app only ever reads it.
            match data::loader::load_file(&data_path) {
                Ok(dataset) => {
                    log::info!(
                        "Loaded {} rows covering {} entities from {}",
                        dataset.len(),
                        dataset.entities().len(),
                        data_path.display()
                    );
                    state.set_dataset(dataset);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e}", data_path.display());
                    state.load_error = Some(format!("{}: {e}", data_path.display()));
                }
            }

            if Path::new(BRANDING_IMAGE).exists() {
                state.branding = Some(format!("file://{BRANDING_IMAGE}"));
            } else {
                log::warn!("Branding image '{BRANDING_IMAGE}' not found");
            }

            Ok(Box::new(GridlightApp::new(state)))
        }),
    )
}
