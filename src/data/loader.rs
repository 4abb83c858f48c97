use std::io::Read;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Penguin, PenguinDataset, Species, UnknownSpecies};

/// The Palmer penguins observations shipped with the application.
static PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while building the dataset. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Species {
        row: usize,
        source: UnknownSpecies,
    },

    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the embedded penguin dataset. Invoked once at startup.
pub fn load() -> Result<PenguinDataset, DataError> {
    load_csv_reader(PENGUINS_CSV.as_bytes())
}

/// Parse a penguins CSV from any reader.
///
/// Expected header:
/// `species,island,bill_length_mm,bill_depth_mm,body_mass_g`
/// Empty cells and the literal `NA` in measurement columns are missing
/// values. An unknown species label fails the whole load.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<PenguinDataset, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut penguins = Vec::new();
    let mut missing_cells = 0usize;

    for (row_no, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        let species: Species = raw
            .species
            .parse()
            .map_err(|source| DataError::Species { row: row_no, source })?;

        missing_cells += [raw.bill_length_mm, raw.bill_depth_mm, raw.body_mass_g]
            .iter()
            .filter(|v| v.is_none())
            .count();

        penguins.push(Penguin {
            species,
            island: raw.island,
            bill_length_mm: raw.bill_length_mm,
            bill_depth_mm: raw.bill_depth_mm,
            body_mass_g: raw.body_mass_g,
        });
    }

    let dataset = PenguinDataset::new(penguins);
    if dataset.is_empty() {
        return Err(DataError::Empty);
    }

    if missing_cells > 0 {
        log::debug!(
            "{missing_cells} missing measurement cells in {} rows",
            dataset.len()
        );
    }

    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV row shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    species: String,
    island: String,
    #[serde(deserialize_with = "de_opt_f64")]
    bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    body_mass_g: Option<f64>,
}

/// Accept empty cells and `NA` as missing; anything else must parse as f64.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if cell.is_empty() || cell == "NA" {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "species,island,bill_length_mm,bill_depth_mm,body_mass_g\n";

    #[test]
    fn embedded_dataset_loads() {
        let ds = load().unwrap();
        assert!(ds.len() > 50, "expected a substantial dataset, got {}", ds.len());
        // The real data has missing measurements in some rows.
        assert!(ds.penguins.iter().any(|p| p.body_mass_g.is_none()));
        // All three species are represented.
        for sp in Species::ALL {
            assert!(ds.penguins.iter().any(|p| p.species == sp));
        }
    }

    #[test]
    fn empty_and_na_cells_become_missing() {
        let csv = format!("{HEADER}Adelie,Torgersen,39.1,,\nGentoo,Biscoe,NA,13.2,4800\n");
        let ds = load_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.penguins[0].bill_length_mm, Some(39.1));
        assert_eq!(ds.penguins[0].bill_depth_mm, None);
        assert_eq!(ds.penguins[0].body_mass_g, None);
        assert_eq!(ds.penguins[1].bill_length_mm, None);
        assert_eq!(ds.penguins[1].body_mass_g, Some(4800.0));
    }

    #[test]
    fn unknown_species_fails_the_load() {
        let csv = format!("{HEADER}Emperor,Dream,40.0,18.0,3500\n");
        let err = load_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Species { row: 0, .. }));
    }

    #[test]
    fn non_numeric_measurement_fails_the_load() {
        let csv = format!("{HEADER}Adelie,Dream,forty,18.0,3500\n");
        assert!(matches!(
            load_csv_reader(csv.as_bytes()),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn headers_only_is_an_empty_dataset() {
        assert!(matches!(
            load_csv_reader(HEADER.as_bytes()),
            Err(DataError::Empty)
        ));
    }

    #[test]
    fn source_order_is_preserved() {
        let csv = format!("{HEADER}Gentoo,Biscoe,46.1,13.2,4500\nAdelie,Dream,39.5,17.4,3800\n");
        let ds = load_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.penguins[0].species, Species::Gentoo);
        assert_eq!(ds.penguins[1].species, Species::Adelie);
    }
}
