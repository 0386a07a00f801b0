use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Row-level problems the CSV layer itself cannot catch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("input contains no launch records")]
    Empty,
    #[error("row {row}: outcome class must be 0 or 1, got {value}")]
    OutcomeOutOfRange { row: usize, value: u8 },
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Column contract of the input file. Extra columns (flight number, full
/// booster version, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: u8,
}

/// Load the launch table from a CSV file.
///
/// Any failure here is a startup-time hard error: the caller logs it and the
/// process exits before a window opens.
pub fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file =
        File::open(path).with_context(|| format!("opening {}", path.display()))?;
    from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse launch records from any reader (tests feed byte slices here).
pub fn from_reader<R: Read>(reader: R) -> Result<LaunchDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        let outcome = Outcome::from_class(raw.class).ok_or(
            DataError::OutcomeOutOfRange {
                row,
                value: raw.class,
            },
        )?;
        records.push(LaunchRecord {
            launch_site: raw.launch_site,
            payload_mass_kg: raw.payload_mass_kg,
            booster_version_category: raw.booster_version_category,
            outcome,
        });
    }

    if records.is_empty() {
        return Err(DataError::Empty.into());
    }
    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::{from_reader, DataError};
    use crate::data::model::Outcome;

    /// The dataset shipped with the dashboard.
    const SHIPPED: &str = include_str!("../../data/spacex_launch_dash.csv");

    #[test]
    fn parses_shipped_dataset() {
        let dataset = from_reader(SHIPPED.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 56);
        assert_eq!(
            dataset.sites,
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(
            dataset.booster_categories,
            vec!["B4", "B5", "FT", "v1.0", "v1.1"]
        );
        assert_eq!(dataset.payload_min, 0.0);
        assert_eq!(dataset.payload_max, 9600.0);
    }

    #[test]
    fn ignores_extra_columns_and_keeps_row_order() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,KSC LC-39A,1,5000.0,F9 FT B1021,FT
2,CCAFS LC-40,0,3000.0,F9 v1.1 B1011,v1.1
";
        let dataset = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records[0].launch_site, "KSC LC-39A");
        assert_eq!(dataset.records[0].outcome, Outcome::Success);
        assert_eq!(dataset.records[1].payload_mass_kg, 3000.0);
        assert_eq!(dataset.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn rejects_out_of_range_class() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,2,5000.0,FT
";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::OutcomeOutOfRange { row: 0, value: 2 })
        );
    }

    #[test]
    fn rejects_unparseable_payload() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,not-a-number,FT
";
        assert!(from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_empty_table() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.downcast_ref::<DataError>(), Some(&DataError::Empty));
    }
}
