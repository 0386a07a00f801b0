use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome, stored in the source file as the `class` column
/// (`0` = failure, `1` = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the numeric `class` value. Anything other than 0/1 is
    /// malformed input.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric `class` value (also the scatter chart's y coordinate).
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full launch table with summary values computed once at load.
///
/// Immutable after construction: the resolver functions and the charts only
/// ever read from it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in source-file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, sorted.
    pub sites: Vec<String>,
    /// Distinct booster version categories, sorted.
    pub booster_categories: Vec<String>,
    /// Smallest payload mass across all rows (kg).
    pub payload_min: f64,
    /// Largest payload mass across all rows (kg).
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the site/category indices and payload bounds from the rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: BTreeSet<&str> = BTreeSet::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for rec in &records {
            sites.insert(rec.launch_site.as_str());
            categories.insert(rec.booster_version_category.as_str());
            payload_min = payload_min.min(rec.payload_mass_kg);
            payload_max = payload_max.max(rec.payload_mass_kg);
        }
        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        let sites: Vec<String> = sites.into_iter().map(str::to_owned).collect();
        let booster_categories: Vec<String> =
            categories.into_iter().map(str::to_owned).collect();

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
