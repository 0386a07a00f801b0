use eframe::egui::{self, Slider, Ui};

use crate::data::resolve::{SiteSelection, ALL_SITES};
use crate::state::AppState;

/// Bounds and step of the payload range control, in kg. Wider than the data
/// on purpose so the full span is always reachable.
const PAYLOAD_SLIDER_MIN: f64 = 0.0;
const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
const PAYLOAD_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the site dropdown and the payload range control.
///
/// Widgets edit a local copy of the selection; any change is handed to the
/// state as one value so both charts recompute together.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let mut selection = state.selection.clone();

    // ---- Launch site dropdown ----
    ui.strong("Launch site");
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(selection.site.label().to_owned())
        .show_ui(ui, |ui: &mut Ui| {
            let all_chosen = selection.site == SiteSelection::AllSites;
            if ui.selectable_label(all_chosen, ALL_SITES).clicked() {
                selection.site = SiteSelection::AllSites;
            }
            for site in &state.dataset.sites {
                let chosen = selection.site.label() == site.as_str();
                if ui.selectable_label(chosen, site).clicked() {
                    selection.site = SiteSelection::Site(site.clone());
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    ui.add(
        Slider::new(
            &mut selection.payload.low,
            PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX,
        )
        .step_by(PAYLOAD_STEP)
        .text("low"),
    );
    ui.add(
        Slider::new(
            &mut selection.payload.high,
            PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX,
        )
        .step_by(PAYLOAD_STEP)
        .text("high"),
    );
    ui.label(format!(
        "Showing {:.0} – {:.0} kg",
        selection.payload.low, selection.payload.high
    ));

    ui.separator();
    ui.label(format!(
        "Dataset payload span: {:.0} – {:.0} kg",
        state.dataset.payload_min, state.dataset.payload_max
    ));

    state.apply_selection(selection);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with dataset counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");

        ui.separator();

        ui.label(format!(
            "{} launches across {} sites",
            state.dataset.len(),
            state.dataset.sites.len()
        ));

        ui.separator();

        ui.label(format!(
            "{} launches in current selection",
            state.charts.scatter.len()
        ));
    });
}
