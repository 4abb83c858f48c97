use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Species – the closed category set of the Palmer penguins data
// ---------------------------------------------------------------------------

/// One of the three penguin species in the dataset.
/// `Ord` so it can live in `BTreeSet` filter selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    /// All species, in the order they appear in the filter controls.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        };
        write!(f, "{name}")
    }
}

/// Unknown species label in the source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpecies(pub String);

impl fmt::Display for UnknownSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown species label '{}'", self.0)
    }
}

impl std::error::Error for UnknownSpecies {}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Gentoo" => Ok(Species::Gentoo),
            "Chinstrap" => Ok(Species::Chinstrap),
            other => Err(UnknownSpecies(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one observation (one row of the source table)
// ---------------------------------------------------------------------------

/// A single penguin observation. Measurement columns are `Option` because
/// the real dataset has missing values in some rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    /// All observations, in source-file order.
    pub penguins: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(penguins: Vec<Penguin>) -> Self {
        PenguinDataset { penguins }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_roundtrip_through_display() {
        for sp in Species::ALL {
            let parsed: Species = sp.to_string().parse().unwrap();
            assert_eq!(parsed, sp);
        }
    }

    #[test]
    fn unknown_species_is_an_error() {
        let err = "Emperor".parse::<Species>().unwrap_err();
        assert_eq!(err, UnknownSpecies("Emperor".to_string()));
    }
}
