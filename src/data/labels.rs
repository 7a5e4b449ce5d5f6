use std::collections::BTreeMap;

use thiserror::Error;

use super::model::Attribute;

/// Human-readable label of every chartable column.
const ATTRIBUTE_LABELS: [(Attribute, &str); 4] = [
    (Attribute::BillLength, "Bill Length (mm)"),
    (Attribute::BillDepth, "Bill Depth (mm)"),
    (Attribute::FlipperLength, "Flipper Length (mm)"),
    (Attribute::BodyMass, "Body Mass (g)"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unknown attribute column '{0}'")]
    UnknownColumn(String),
    #[error("unknown attribute label '{0}'")]
    UnknownLabel(String),
}

// ---------------------------------------------------------------------------
// AttributeLabels – column name ↔ display label
// ---------------------------------------------------------------------------

/// Bidirectional map between column names (`bill_length_mm`) and the labels
/// shown in the UI (`Bill Length (mm)`). Both directions are total over the
/// fixed set and reject anything else.
#[derive(Debug, Clone)]
pub struct AttributeLabels {
    labels: BTreeMap<&'static str, &'static str>,
    columns: BTreeMap<&'static str, &'static str>,
}

impl Default for AttributeLabels {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeLabels {
    pub fn new() -> Self {
        let labels: BTreeMap<&'static str, &'static str> = ATTRIBUTE_LABELS
            .iter()
            .map(|(attr, label)| (attr.column_name(), *label))
            .collect();
        let columns: BTreeMap<&'static str, &'static str> =
            labels.iter().map(|(col, label)| (*label, *col)).collect();
        debug_assert_eq!(labels.len(), columns.len(), "attribute labels must be unique");

        Self { labels, columns }
    }

    /// Display label for a column name.
    pub fn to_label(&self, column: &str) -> Result<&'static str, LabelError> {
        self.labels
            .get(column)
            .copied()
            .ok_or_else(|| LabelError::UnknownColumn(column.to_string()))
    }

    /// Column name for a display label.
    pub fn to_internal(&self, label: &str) -> Result<&'static str, LabelError> {
        self.columns
            .get(label)
            .copied()
            .ok_or_else(|| LabelError::UnknownLabel(label.to_string()))
    }

    /// Resolve a display label all the way to its [`Attribute`].
    pub fn resolve(&self, label: &str) -> Result<Attribute, LabelError> {
        let column = self.to_internal(label)?;
        Attribute::from_column_name(column)
            .ok_or_else(|| LabelError::UnknownColumn(column.to_string()))
    }

    /// Labels in the order they are offered to the user.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        ATTRIBUTE_LABELS.iter().map(|(_, label)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_column() {
        let labels = AttributeLabels::new();
        for attr in Attribute::ALL {
            let name = attr.column_name();
            let label = labels.to_label(name).unwrap();
            assert_eq!(labels.to_internal(label).unwrap(), name);
            assert_eq!(labels.resolve(label).unwrap(), attr);
        }
    }

    #[test]
    fn is_a_bijection() {
        let labels = AttributeLabels::new();
        assert_eq!(labels.labels.len(), Attribute::ALL.len());
        assert_eq!(labels.columns.len(), Attribute::ALL.len());
    }

    #[test]
    fn bill_length_label_maps_to_its_column() {
        let labels = AttributeLabels::new();
        assert_eq!(labels.to_internal("Bill Length (mm)").unwrap(), "bill_length_mm");
        assert_eq!(labels.to_label("body_mass_g").unwrap(), "Body Mass (g)");
    }

    #[test]
    fn unknown_names_are_errors() {
        let labels = AttributeLabels::new();
        assert_eq!(
            labels.to_label("species"),
            Err(LabelError::UnknownColumn("species".into()))
        );
        assert_eq!(
            labels.to_internal("bill_length_mm"),
            Err(LabelError::UnknownLabel("bill_length_mm".into()))
        );
        assert!(labels.resolve("Beak Size").is_err());
    }

    #[test]
    fn labels_keep_menu_order() {
        let labels: Vec<_> = AttributeLabels::new().labels().collect();
        assert_eq!(labels[0], "Bill Length (mm)");
        assert_eq!(labels.len(), 4);
    }
}
