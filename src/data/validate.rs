use super::model::{Attribute, PenguinRecord, PenguinTable};

/// Check whether `table` can be charted over `attribute`.
///
/// An empty table, or one where every cell is missing, cannot. Missing values
/// in `attribute` alone are logged and tolerated: the chart is drawn from the
/// rows that have a value.
pub fn validate(table: &PenguinTable, attribute: Attribute) -> bool {
    if table.is_empty() || table.iter().all(PenguinRecord::is_all_missing) {
        log::warn!("The filtered data is empty or contains only missing values.");
        return false;
    }

    let missing = table.missing_count(attribute);
    if missing > 0 {
        log::warn!(
            "Selected attribute '{}' contains {missing} missing values.",
            attribute.column_name()
        );
    }

    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use log::Level;

    use super::*;
    use crate::data::model::{Island, Species};

    /// Warnings logged on this thread since the last call.
    fn warnings() -> Vec<String> {
        let bodies = RefCell::new(Vec::new());
        testing_logger::validate(|logs| {
            *bodies.borrow_mut() = logs
                .iter()
                .filter(|l| l.level == Level::Warn)
                .map(|l| l.body.clone())
                .collect();
        });
        bodies.into_inner()
    }

    #[test]
    fn empty_table_fails() {
        assert!(!validate(&PenguinTable::default(), Attribute::BillLength));
    }

    #[test]
    fn all_missing_row_fails() {
        let table = PenguinTable::from_records(vec![PenguinRecord::default()]);
        assert!(!validate(&table, Attribute::BillLength));
    }

    #[test]
    fn missing_attribute_only_passes() {
        let table = PenguinTable::from_records(vec![PenguinRecord {
            species: Some(Species::Adelie),
            island: Some(Island::Torgersen),
            bill_depth_mm: Some(18.7),
            flipper_length_mm: Some(181.0),
            body_mass_g: Some(3750.0),
            ..Default::default()
        }]);
        assert!(validate(&table, Attribute::BillLength));
    }

    #[test]
    fn one_usable_row_is_enough() {
        let table = PenguinTable::from_records(vec![
            PenguinRecord::default(),
            PenguinRecord {
                body_mass_g: Some(4200.0),
                ..Default::default()
            },
        ]);
        assert!(validate(&table, Attribute::BodyMass));
    }

    #[test]
    fn unusable_tables_log_one_warning() {
        testing_logger::setup();

        assert!(!validate(&PenguinTable::default(), Attribute::BillLength));
        let empty = warnings();
        assert_eq!(empty.len(), 1);
        assert!(empty[0].contains("empty or contains only missing values"));

        let all_missing = PenguinTable::from_records(vec![PenguinRecord::default()]);
        assert!(!validate(&all_missing, Attribute::BillLength));
        assert_eq!(warnings().len(), 1);
    }

    #[test]
    fn partially_missing_attribute_warns_and_passes() {
        testing_logger::setup();

        let table = PenguinTable::from_records(vec![
            PenguinRecord {
                species: Some(Species::Adelie),
                bill_length_mm: Some(39.1),
                ..Default::default()
            },
            PenguinRecord {
                species: Some(Species::Adelie),
                body_mass_g: Some(3750.0),
                ..Default::default()
            },
        ]);
        assert!(validate(&table, Attribute::BillLength));

        let logged = warnings();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].contains("bill_length_mm"));
        assert!(logged[0].contains("1 missing"));
    }

    #[test]
    fn complete_attribute_logs_nothing() {
        testing_logger::setup();

        let table = PenguinTable::from_records(vec![PenguinRecord {
            body_mass_g: Some(4200.0),
            ..Default::default()
        }]);
        assert!(validate(&table, Attribute::BodyMass));
        assert!(warnings().is_empty());
    }
}
