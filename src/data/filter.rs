use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::{Island, PenguinTable, Species};
use crate::reactive::Memo;

// ---------------------------------------------------------------------------
// Filter criteria: which species and islands are selected
// ---------------------------------------------------------------------------

/// The species and islands currently ticked in the filter panel.
/// An empty set selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub species: BTreeSet<Species>,
    pub islands: BTreeSet<Island>,
}

impl Default for FilterCriteria {
    /// Everything selected, matching the initial state of the checkboxes.
    fn default() -> Self {
        Self {
            species: Species::ALL.into_iter().collect(),
            islands: Island::ALL.into_iter().collect(),
        }
    }
}

impl FilterCriteria {
    pub fn toggle_species(&mut self, species: Species) {
        if !self.species.remove(&species) {
            self.species.insert(species);
        }
    }

    pub fn toggle_island(&mut self, island: Island) {
        if !self.islands.remove(&island) {
            self.islands.insert(island);
        }
    }
}

/// Return the rows whose species and island are both selected, in dataset
/// order. Rows with a missing species or island never match.
pub fn filter_table(dataset: &PenguinTable, criteria: &FilterCriteria) -> PenguinTable {
    let records = dataset
        .records()
        .iter()
        .filter(|r| {
            r.species.is_some_and(|s| criteria.species.contains(&s))
                && r.island.is_some_and(|i| criteria.islands.contains(&i))
        })
        .copied()
        .collect();
    PenguinTable::from_records(records)
}

// ---------------------------------------------------------------------------
// FilterEngine – memoized filtering over the shared dataset
// ---------------------------------------------------------------------------

/// Derives the filtered table from the immutable dataset, recomputing only
/// when the criteria change.
#[derive(Debug)]
pub struct FilterEngine {
    dataset: Arc<PenguinTable>,
    memo: Memo<FilterCriteria, PenguinTable>,
}

impl FilterEngine {
    pub fn new(dataset: Arc<PenguinTable>) -> Self {
        Self {
            dataset,
            memo: Memo::new(),
        }
    }

    pub fn dataset(&self) -> &PenguinTable {
        &self.dataset
    }

    pub fn filtered(&mut self, criteria: &FilterCriteria) -> &PenguinTable {
        let dataset = &self.dataset;
        self.memo.get(criteria, |criteria| {
            let table = filter_table(dataset, criteria);
            log::debug!(
                "Filtered {} of {} penguins (species {:?}, islands {:?})",
                table.len(),
                dataset.len(),
                criteria.species,
                criteria.islands
            );
            table
        })
    }

    /// How many times the filtered table has been derived.
    #[cfg(test)]
    pub fn recomputations(&self) -> u64 {
        self.memo.computations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_penguins;
    use crate::data::model::PenguinRecord;

    fn dataset() -> Arc<PenguinTable> {
        Arc::new(load_penguins().unwrap())
    }

    #[test]
    fn no_species_selected_is_empty() {
        let criteria = FilterCriteria {
            species: BTreeSet::new(),
            ..Default::default()
        };
        assert!(filter_table(&dataset(), &criteria).is_empty());
    }

    #[test]
    fn everything_selected_is_identity() {
        let ds = dataset();
        assert_eq!(filter_table(&ds, &FilterCriteria::default()), *ds);
    }

    #[test]
    fn adelie_on_torgersen() {
        let criteria = FilterCriteria {
            species: BTreeSet::from([Species::Adelie]),
            islands: BTreeSet::from([Island::Torgersen]),
        };
        let ds = dataset();
        let table = filter_table(&ds, &criteria);
        assert_eq!(table.len(), 52);
        assert!(table
            .iter()
            .all(|r| r.species == Some(Species::Adelie) && r.island == Some(Island::Torgersen)));

        // Torgersen is home to Adelie penguins only.
        let torgersen = FilterCriteria {
            islands: BTreeSet::from([Island::Torgersen]),
            ..Default::default()
        };
        assert_eq!(filter_table(&ds, &torgersen), table);
    }

    #[test]
    fn matches_set_definition() {
        let ds = dataset();
        let criteria = FilterCriteria {
            species: BTreeSet::from([Species::Gentoo, Species::Chinstrap]),
            islands: BTreeSet::from([Island::Dream]),
        };
        let expected: Vec<PenguinRecord> = ds
            .iter()
            .filter(|r| {
                matches!(r.species, Some(Species::Gentoo | Species::Chinstrap))
                    && r.island == Some(Island::Dream)
            })
            .copied()
            .collect();
        let table = filter_table(&ds, &criteria);
        assert_eq!(table.records(), expected.as_slice());
        assert_eq!(table.len(), 68);
    }

    #[test]
    fn rows_without_species_never_match() {
        let ds = PenguinTable::from_records(vec![PenguinRecord {
            island: Some(Island::Dream),
            ..Default::default()
        }]);
        assert!(filter_table(&ds, &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn engine_is_idempotent_and_memoized() {
        let mut engine = FilterEngine::new(dataset());
        let criteria = FilterCriteria::default();
        let first = engine.filtered(&criteria).clone();
        let second = engine.filtered(&criteria).clone();
        assert_eq!(first, second);
        assert_eq!(engine.recomputations(), 1);
    }

    #[test]
    fn engine_recomputes_on_change() {
        let mut engine = FilterEngine::new(dataset());
        let mut criteria = FilterCriteria::default();
        assert_eq!(engine.filtered(&criteria).len(), 344);

        criteria.toggle_species(Species::Gentoo);
        assert_eq!(engine.filtered(&criteria).len(), 220);
        assert_eq!(engine.recomputations(), 2);

        criteria.toggle_species(Species::Gentoo);
        assert_eq!(engine.filtered(&criteria).len(), 344);
        assert_eq!(engine.recomputations(), 3);
    }
}
