mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchboardApp;
use eframe::egui;

/// Fixed input contract: the launch table ships next to the binary.
const DATA_FILE: &str = "data/spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is loaded exactly once, before the window opens. A missing
    // or malformed file is a startup hard error with no recovery path.
    let dataset = match data::loader::load_csv(Path::new(DATA_FILE)) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("failed to load launch records: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} launch records from {} sites, payload {:.0}–{:.0} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.payload_min,
        dataset.payload_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchboardApp::new(dataset)))),
    )
}
