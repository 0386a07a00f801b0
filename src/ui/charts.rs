use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::{spaced_hues, FAILURE_COLOR, SUCCESS_COLOR};
use crate::data::resolve::{ProportionView, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Proportion chart (success counts)
// ---------------------------------------------------------------------------

/// Render the proportion chart: one bar per site on the aggregate view, or
/// the failure/success split for the selected site.
pub fn proportion_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let title = match &state.selection.site {
        SiteSelection::AllSites => "Total Successful Launches by Site".to_string(),
        SiteSelection::Site(site) => format!("Total Successful Launches for {site}"),
    };
    ui.strong(title);

    // One single-bar series per slice so the legend carries the labels.
    let mut series: Vec<BarChart> = Vec::new();
    let mut x_labels: Vec<String> = Vec::new();

    match &state.charts.proportion {
        ProportionView::SuccessesBySite(rows) => {
            let hues = spaced_hues(rows.len());
            for (i, (site, count)) in rows.iter().enumerate() {
                series.push(
                    BarChart::new(vec![Bar::new(i as f64, *count as f64)
                        .width(0.6)
                        .fill(hues[i])])
                    .color(hues[i])
                    .name(site),
                );
                x_labels.push(site.clone());
            }
        }
        ProportionView::OutcomeSplit(rows) => {
            for (i, (outcome, count)) in rows.iter().enumerate() {
                let color = if outcome.is_success() {
                    SUCCESS_COLOR
                } else {
                    FAILURE_COLOR
                };
                series.push(
                    BarChart::new(vec![Bar::new(i as f64, *count as f64)
                        .width(0.6)
                        .fill(color)])
                    .color(color)
                    .name(outcome.to_string()),
                );
                x_labels.push(outcome.to_string());
            }
        }
    }

    Plot::new("proportion_chart")
        .height(height)
        .legend(Legend::default())
        .y_axis_label("Launches")
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            x_labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in series {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Payload scatter chart
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter: one point per record surviving the
/// current selection, colored by booster version category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let title = format!(
        "Success Count on Payload Mass for {}",
        state.selection.site.label()
    );
    ui.strong(title);

    // Group the surviving rows by category so each category is one named
    // series in the legend.
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.charts.scatter {
        let rec = &state.dataset.records[idx];
        by_category
            .entry(rec.booster_version_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_class() as f64]);
    }

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Class")
        .include_y(-0.5)
        .include_y(1.5)
        .allow_scroll(false)
        .y_axis_formatter(|mark, _range| {
            if mark.value.abs() < 1e-6 {
                "Failure".to_string()
            } else if (mark.value - 1.0).abs() < 1e-6 {
                "Success".to_string()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                let pts: PlotPoints = points.into_iter().collect();
                plot_ui.points(
                    Points::new(pts)
                        .radius(3.5)
                        .color(state.booster_colors.get(category))
                        .name(category),
                );
            }
        });
}
