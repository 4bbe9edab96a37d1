use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// One observation: an entity's electricity-access percentage in a year.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub entity: String,
    pub year: i32,
    /// Share of the population with access, nominally in `[0, 100]`.
    pub access_percent: f64,
}

// ---------------------------------------------------------------------------
// AccessDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with precomputed selection-control values.
///
/// Immutable after load: the app holds one instance for the process lifetime
/// and every filtered view is a fresh `Vec` built from `records`.
#[derive(Debug, Clone)]
pub struct AccessDataset {
    /// All observations in file order.
    pub records: Vec<Record>,
    entities: Vec<String>,
    years: Vec<i32>,
}

impl AccessDataset {
    /// Build the dataset and its distinct entity / year lists.
    pub fn from_records(records: Vec<Record>) -> Self {
        let entity_set: BTreeSet<&str> = records.iter().map(|r| r.entity.as_str()).collect();
        let year_set: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
        AccessDataset {
            entities: entity_set.into_iter().map(str::to_owned).collect(),
            years: year_set.into_iter().collect(),
            records,
        }
    }

    /// Distinct entity names, sorted ascending. Populates the sidebar multi-select.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// Distinct observation years, sorted ascending. Populates the focus-year combo.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(entity: &str, year: i32, access: f64) -> Record {
        Record {
            entity: entity.to_string(),
            year,
            access_percent: access,
        }
    }

    #[test]
    fn distinct_entities_are_sorted_and_deduplicated() {
        let ds = AccessDataset::from_records(vec![
            rec("India", 2001, 60.0),
            rec("Angola", 2000, 30.0),
            rec("India", 2000, 55.0),
            rec("Brazil", 2000, 90.0),
        ]);

        assert_eq!(ds.entities(), ["Angola", "Brazil", "India"]);
    }

    #[test]
    fn distinct_years_are_sorted_and_deduplicated() {
        let ds = AccessDataset::from_records(vec![
            rec("India", 2003, 60.0),
            rec("Angola", 2000, 30.0),
            rec("India", 2000, 55.0),
        ]);

        assert_eq!(ds.years(), [2000, 2003]);
    }

    #[test]
    fn empty_dataset_has_no_distinct_values() {
        let ds = AccessDataset::from_records(Vec::new());

        assert!(ds.is_empty());
        assert!(ds.entities().is_empty());
        assert!(ds.years().is_empty());
    }
}
