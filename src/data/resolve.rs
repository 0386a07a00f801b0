use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Selection state – what the controls currently say
// ---------------------------------------------------------------------------

/// Sentinel offered by the site dropdown alongside the concrete sites.
pub const ALL_SITES: &str = "All Sites";

/// Dropdown selection: the aggregate view, or one concrete site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Text shown in the dropdown for this selection.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a record at the given site passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

/// Closed payload-mass interval chosen by the range control, in kg.
///
/// `low <= high` is not enforced; an inverted range simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

/// The complete control state. The UI builds a fresh `Selection` whenever
/// either control moves and hands it to [`resolve_charts`] as one value, so
/// both charts always reflect the same state.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// Proportion view
// ---------------------------------------------------------------------------

/// Input table for the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ProportionView {
    /// One success count per distinct site (aggregate view).
    SuccessesBySite(Vec<(String, u64)>),
    /// Failure/success split for a single site. Only outcome classes that
    /// actually occur at the site appear, so this holds at most two rows,
    /// and an unknown site yields an empty table rather than an error.
    OutcomeSplit(Vec<(Outcome, u64)>),
}

/// Derive the proportion-chart table from the current site selection.
pub fn proportion_view(dataset: &LaunchDataset, site: &SiteSelection) -> ProportionView {
    match site {
        SiteSelection::AllSites => {
            ProportionView::SuccessesBySite(successes_by_site(dataset))
        }
        SiteSelection::Site(site) => {
            ProportionView::OutcomeSplit(outcome_split(dataset, site))
        }
    }
}

/// Count of success rows for every distinct site, in `dataset.sites` order.
fn successes_by_site(dataset: &LaunchDataset) -> Vec<(String, u64)> {
    dataset
        .sites
        .iter()
        .map(|site| {
            let successes = dataset
                .records
                .iter()
                .filter(|rec| rec.launch_site == *site && rec.outcome.is_success())
                .count() as u64;
            (site.clone(), successes)
        })
        .collect()
}

/// Failure/success counts for one site, failures first.
fn outcome_split(dataset: &LaunchDataset, site: &str) -> Vec<(Outcome, u64)> {
    let mut failures = 0u64;
    let mut successes = 0u64;
    for rec in &dataset.records {
        if rec.launch_site != site {
            continue;
        }
        match rec.outcome {
            Outcome::Failure => failures += 1,
            Outcome::Success => successes += 1,
        }
    }

    let mut rows = Vec::with_capacity(2);
    if failures > 0 {
        rows.push((Outcome::Failure, failures));
    }
    if successes > 0 {
        rows.push((Outcome::Success, successes));
    }
    rows
}

// ---------------------------------------------------------------------------
// Scatter view
// ---------------------------------------------------------------------------

/// Indices of records passing the site and payload-range predicates.
///
/// The result is a subsequence of the table: original row order is preserved
/// and nothing is copied; the chart reads the surviving rows through these
/// indices.
pub fn scatter_indices(dataset: &LaunchDataset, selection: &Selection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.payload.contains(rec.payload_mass_kg)
                && selection.site.matches(&rec.launch_site)
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Combined resolution – one selection in, both chart inputs out
// ---------------------------------------------------------------------------

/// Everything the two chart slots need for one selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInputs {
    pub proportion: ProportionView,
    pub scatter: Vec<usize>,
}

/// Recompute both chart tables from the dataset and the current selection.
/// Pure and synchronous; called from the UI whenever either control changes.
pub fn resolve_charts(dataset: &LaunchDataset, selection: &Selection) -> ChartInputs {
    ChartInputs {
        proportion: proportion_view(dataset, &selection.site),
        scatter: scatter_indices(dataset, selection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord};

    fn record(site: &str, mass: f64, category: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            booster_version_category: category.to_string(),
            outcome,
        }
    }

    /// The worked example from the dashboard's behavioral contract.
    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("KSC LC-39A", 5000.0, "FT", Outcome::Success),
            record("KSC LC-39A", 3000.0, "FT", Outcome::Failure),
            record("CCAFS LC-40", 7000.0, "B4", Outcome::Success),
        ])
    }

    fn full_range(dataset: &LaunchDataset) -> PayloadRange {
        PayloadRange {
            low: 0.0,
            high: dataset.payload_max,
        }
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let dataset = sample();
        let view = proportion_view(&dataset, &SiteSelection::AllSites);
        assert_eq!(
            view,
            ProportionView::SuccessesBySite(vec![
                ("CCAFS LC-40".to_string(), 1),
                ("KSC LC-39A".to_string(), 1),
            ])
        );
    }

    #[test]
    fn all_sites_success_total_matches_dataset() {
        let dataset = sample();
        let ProportionView::SuccessesBySite(rows) =
            proportion_view(&dataset, &SiteSelection::AllSites)
        else {
            panic!("expected aggregate view");
        };

        // One row per distinct site, and the counts add up to the number of
        // success rows in the whole table.
        assert_eq!(rows.len(), dataset.sites.len());
        let total: u64 = rows.iter().map(|(_, n)| n).sum();
        let successes = dataset
            .records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count() as u64;
        assert_eq!(total, successes);
    }

    #[test]
    fn single_site_splits_by_outcome() {
        let dataset = sample();
        let view =
            proportion_view(&dataset, &SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(
            view,
            ProportionView::OutcomeSplit(vec![
                (Outcome::Failure, 1),
                (Outcome::Success, 1),
            ])
        );
    }

    #[test]
    fn single_site_counts_sum_to_site_rows() {
        let dataset = sample();
        for site in &dataset.sites {
            let ProportionView::OutcomeSplit(rows) =
                proportion_view(&dataset, &SiteSelection::Site(site.clone()))
            else {
                panic!("expected split view");
            };
            assert!(rows.len() <= 2);
            let total: u64 = rows.iter().map(|(_, n)| n).sum();
            let site_rows = dataset
                .records
                .iter()
                .filter(|r| r.launch_site == *site)
                .count() as u64;
            assert_eq!(total, site_rows);
        }
    }

    #[test]
    fn site_with_single_outcome_yields_one_row() {
        let dataset = sample();
        let view =
            proportion_view(&dataset, &SiteSelection::Site("CCAFS LC-40".to_string()));
        assert_eq!(view, ProportionView::OutcomeSplit(vec![(Outcome::Success, 1)]));
    }

    #[test]
    fn unknown_site_yields_empty_table() {
        let dataset = sample();
        let view =
            proportion_view(&dataset, &SiteSelection::Site("VAFB SLC-4E".to_string()));
        assert_eq!(view, ProportionView::OutcomeSplit(Vec::new()));

        let selection = Selection {
            site: SiteSelection::Site("VAFB SLC-4E".to_string()),
            payload: full_range(&dataset),
        };
        assert!(scatter_indices(&dataset, &selection).is_empty());
    }

    #[test]
    fn scatter_restricts_to_payload_range() {
        let dataset = sample();
        let selection = Selection {
            site: SiteSelection::AllSites,
            payload: PayloadRange {
                low: 4000.0,
                high: 7000.0,
            },
        };
        let indices = scatter_indices(&dataset, &selection);
        assert_eq!(indices, vec![0, 2]);
        for &i in &indices {
            let mass = dataset.records[i].payload_mass_kg;
            assert!((4000.0..=7000.0).contains(&mass));
        }
    }

    #[test]
    fn scatter_range_bounds_are_inclusive() {
        let dataset = sample();
        let selection = Selection {
            site: SiteSelection::AllSites,
            payload: PayloadRange {
                low: 3000.0,
                high: 5000.0,
            },
        };
        assert_eq!(scatter_indices(&dataset, &selection), vec![0, 1]);
    }

    #[test]
    fn scatter_full_range_returns_every_row_in_order() {
        let dataset = sample();
        let selection = Selection {
            site: SiteSelection::AllSites,
            payload: full_range(&dataset),
        };
        assert_eq!(scatter_indices(&dataset, &selection), vec![0, 1, 2]);

        let selection = Selection {
            site: SiteSelection::Site("KSC LC-39A".to_string()),
            payload: full_range(&dataset),
        };
        assert_eq!(scatter_indices(&dataset, &selection), vec![0, 1]);
    }

    #[test]
    fn scatter_is_deterministic() {
        let dataset = sample();
        let selection = Selection {
            site: SiteSelection::Site("KSC LC-39A".to_string()),
            payload: PayloadRange {
                low: 0.0,
                high: 10_000.0,
            },
        };
        assert_eq!(
            scatter_indices(&dataset, &selection),
            scatter_indices(&dataset, &selection)
        );
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let dataset = sample();
        let selection = Selection {
            site: SiteSelection::AllSites,
            payload: PayloadRange {
                low: 6000.0,
                high: 2000.0,
            },
        };
        assert!(scatter_indices(&dataset, &selection).is_empty());
    }

    #[test]
    fn resolve_charts_computes_both_views_together() {
        let dataset = sample();
        let selection = Selection {
            site: SiteSelection::Site("KSC LC-39A".to_string()),
            payload: PayloadRange {
                low: 0.0,
                high: 10_000.0,
            },
        };
        let charts = resolve_charts(&dataset, &selection);
        assert_eq!(
            charts.proportion,
            proportion_view(&dataset, &selection.site)
        );
        assert_eq!(charts.scatter, scatter_indices(&dataset, &selection));
    }
}
