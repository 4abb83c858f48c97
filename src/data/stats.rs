use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Summary statistics over the filtered view
// ---------------------------------------------------------------------------

/// Placeholder shown when a mean is undefined (empty view or all values
/// missing).
pub const NO_VALUE: &str = "--";

/// The three value-box figures derived from the current filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_bill_length_mm: Option<f64>,
    pub mean_bill_depth_mm: Option<f64>,
}

impl Summary {
    /// Compute count and means over the rows selected by `indices`.
    /// Missing measurements are skipped, never averaged as zero.
    pub fn compute(dataset: &PenguinDataset, indices: &[usize]) -> Self {
        Summary {
            count: indices.len(),
            mean_bill_length_mm: mean_of(dataset, indices, |p| p.bill_length_mm),
            mean_bill_depth_mm: mean_of(dataset, indices, |p| p.bill_depth_mm),
        }
    }
}

/// Arithmetic mean of one measurement column over the given rows.
/// `None` when no row carries a value.
fn mean_of(
    dataset: &PenguinDataset,
    indices: &[usize],
    column: impl Fn(&Penguin) -> Option<f64>,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &i in indices {
        if let Some(v) = column(&dataset.penguins[i]) {
            sum += v;
            n += 1;
        }
    }
    (n > 0).then(|| sum / n as f64)
}

/// Format a millimetre mean to one decimal place, or the placeholder when
/// undefined.
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} mm"),
        None => NO_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Species;

    fn penguin(length: Option<f64>, depth: Option<f64>) -> Penguin {
        Penguin {
            species: Species::Adelie,
            island: "Dream".to_string(),
            bill_length_mm: length,
            bill_depth_mm: depth,
            body_mass_g: Some(3500.0),
        }
    }

    #[test]
    fn means_skip_missing_values() {
        let ds = PenguinDataset::new(vec![
            penguin(Some(40.0), Some(18.0)),
            penguin(None, Some(20.0)),
            penguin(Some(44.0), None),
        ]);
        let s = Summary::compute(&ds, &[0, 1, 2]);
        assert_eq!(s.count, 3);
        assert_eq!(s.mean_bill_length_mm, Some(42.0));
        assert_eq!(s.mean_bill_depth_mm, Some(19.0));
    }

    #[test]
    fn empty_view_has_zero_count_and_undefined_means() {
        let ds = PenguinDataset::new(vec![penguin(Some(40.0), Some(18.0))]);
        let s = Summary::compute(&ds, &[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean_bill_length_mm, None);
        assert_eq!(s.mean_bill_depth_mm, None);
    }

    #[test]
    fn all_missing_column_yields_no_mean() {
        let ds = PenguinDataset::new(vec![penguin(None, Some(18.0))]);
        let s = Summary::compute(&ds, &[0]);
        assert_eq!(s.mean_bill_length_mm, None);
        assert_eq!(s.mean_bill_depth_mm, Some(18.0));
    }

    #[test]
    fn single_row_mean_is_its_own_value() {
        let ds = PenguinDataset::new(vec![
            penguin(Some(39.1), Some(18.7)),
            penguin(Some(50.0), Some(15.0)),
        ]);
        let s = Summary::compute(&ds, &[0]);
        assert_eq!(s.mean_bill_length_mm, Some(39.1));
    }

    #[test]
    fn millimetre_formatting() {
        assert_eq!(format_mm(Some(43.92)), "43.9 mm");
        assert_eq!(format_mm(Some(17.0)), "17.0 mm");
        assert_eq!(format_mm(None), NO_VALUE);
    }
}
