use std::collections::{BTreeSet, HashMap};

use super::model::Record;

// ---------------------------------------------------------------------------
// Filtering – pure functions over the immutable dataset
// ---------------------------------------------------------------------------

/// Records whose entity is in `selected`, original relative order preserved.
///
/// An empty selection is a valid state (nothing picked in the sidebar) and
/// yields an empty view, not an error.
pub fn filter_by_entities(records: &[Record], selected: &BTreeSet<String>) -> Vec<Record> {
    records
        .iter()
        .filter(|r| selected.contains(&r.entity))
        .cloned()
        .collect()
}

/// Records observed in `year`, original relative order preserved.
///
/// A year absent from the data yields an empty view.
pub fn filter_by_year(records: &[Record], year: i32) -> Vec<Record> {
    records.iter().filter(|r| r.year == year).cloned().collect()
}

// ---------------------------------------------------------------------------
// Aggregation – per-entity mean
// ---------------------------------------------------------------------------

/// Per-entity arithmetic mean of the access percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMean {
    pub entity: String,
    pub mean_access: f64,
}

/// Group `records` by entity and average, sorted ascending by mean.
///
/// The sort is stable, so entities with equal means keep the order in which
/// they first appear in `records`. Entities without records form no group.
pub fn mean_by_entity(records: &[Record]) -> Vec<EntityMean> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for r in records {
        match index.get(r.entity.as_str()) {
            Some(&i) => {
                groups[i].1 += r.access_percent;
                groups[i].2 += 1;
            }
            None => {
                index.insert(r.entity.as_str(), groups.len());
                groups.push((r.entity.clone(), r.access_percent, 1));
            }
        }
    }

    let mut means: Vec<EntityMean> = groups
        .into_iter()
        .map(|(entity, sum, n)| EntityMean {
            entity,
            mean_access: sum / n as f64,
        })
        .collect();
    means.sort_by(|a, b| a.mean_access.total_cmp(&b.mean_access));
    means
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rec(entity: &str, year: i32, access: f64) -> Record {
        Record {
            entity: entity.to_string(),
            year,
            access_percent: access,
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("Brazil", 2000, 60.0),
            rec("Brazil", 2001, 70.0),
            rec("Angola", 2000, 30.0),
        ]
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filter_by_entities_keeps_exactly_the_selected_entities() {
        let records = sample();
        let filtered = filter_by_entities(&records, &set(&["Brazil"]));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.entity == "Brazil"));
    }

    #[test]
    fn filter_by_entities_preserves_original_order() {
        let records = vec![
            rec("Angola", 2000, 30.0),
            rec("Brazil", 2000, 60.0),
            rec("Angola", 2001, 33.0),
        ];
        let filtered = filter_by_entities(&records, &set(&["Angola", "Brazil"]));

        assert_eq!(filtered, records);
    }

    #[test]
    fn filter_by_entities_with_empty_selection_is_empty() {
        let filtered = filter_by_entities(&sample(), &BTreeSet::new());

        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_by_entities_is_idempotent() {
        let selection = set(&["Brazil", "Angola"]);
        let once = filter_by_entities(&sample(), &selection);
        let twice = filter_by_entities(&once, &selection);

        assert_eq!(once, twice);
    }

    #[test]
    fn filter_by_year_keeps_exactly_that_year() {
        let filtered = filter_by_year(&sample(), 2000);

        assert_eq!(
            filtered,
            vec![rec("Brazil", 2000, 60.0), rec("Angola", 2000, 30.0)]
        );
    }

    #[test]
    fn filter_by_unknown_year_is_empty() {
        assert!(filter_by_year(&sample(), 1990).is_empty());
    }

    #[test]
    fn mean_by_entity_computes_arithmetic_means_sorted_ascending() {
        let means = mean_by_entity(&sample());

        assert_eq!(means.len(), 2);
        assert_eq!(means[0].entity, "Angola");
        assert_abs_diff_eq!(means[0].mean_access, 30.0, epsilon = 1e-9);
        assert_eq!(means[1].entity, "Brazil");
        assert_abs_diff_eq!(means[1].mean_access, 65.0, epsilon = 1e-9);
    }

    #[test]
    fn mean_by_entity_output_is_non_decreasing() {
        let records = vec![
            rec("A", 2000, 80.0),
            rec("B", 2000, 10.0),
            rec("C", 2000, 45.0),
            rec("B", 2001, 20.0),
        ];
        let means = mean_by_entity(&records);

        assert!(means.windows(2).all(|w| w[0].mean_access <= w[1].mean_access));
    }

    #[test]
    fn mean_by_entity_breaks_ties_by_first_encounter() {
        let records = vec![
            rec("Zambia", 2000, 50.0),
            rec("Kenya", 2000, 50.0),
            rec("Ghana", 2000, 10.0),
        ];
        let means = mean_by_entity(&records);

        assert_eq!(means[0].entity, "Ghana");
        assert_eq!(means[1].entity, "Zambia");
        assert_eq!(means[2].entity, "Kenya");
    }

    #[test]
    fn mean_by_entity_of_empty_input_is_empty() {
        assert!(mean_by_entity(&[]).is_empty());
    }
}
