use crate::color::CategoryColors;
use crate::data::model::LaunchDataset;
use crate::data::resolve::{
    resolve_charts, ChartInputs, PayloadRange, Selection, SiteSelection,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the window opens and never changes;
/// `charts` always holds the resolver output for `selection`.
pub struct AppState {
    pub dataset: LaunchDataset,
    pub selection: Selection,
    pub charts: ChartInputs,
    /// Scatter-point colours, keyed by booster version category.
    pub booster_colors: CategoryColors,
}

impl AppState {
    /// Start on the aggregate view with the range spanning the whole table,
    /// mirroring the controls' initial positions.
    pub fn new(dataset: LaunchDataset) -> Self {
        let selection = Selection {
            site: SiteSelection::AllSites,
            payload: PayloadRange {
                low: dataset.payload_min,
                high: dataset.payload_max,
            },
        };
        let charts = resolve_charts(&dataset, &selection);
        let booster_colors = CategoryColors::new(&dataset.booster_categories);
        AppState {
            dataset,
            selection,
            charts,
            booster_colors,
        }
    }

    /// Apply a selection change coming from the controls.
    ///
    /// Both chart inputs are recomputed from the one new selection value, so
    /// the two charts can never drift apart.
    pub fn apply_selection(&mut self, selection: Selection) {
        if selection == self.selection {
            return;
        }
        self.charts = resolve_charts(&self.dataset, &selection);
        self.selection = selection;
    }
}
