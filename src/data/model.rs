use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Categorical dimensions
// ---------------------------------------------------------------------------

/// Penguin species. Declaration order is the order shown in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Island in the Palmer Archipelago where the penguin was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl Island {
    pub const ALL: [Island; 3] = [Island::Biscoe, Island::Dream, Island::Torgersen];

    pub fn name(&self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn name(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

// ---------------------------------------------------------------------------
// Columns and cells
// ---------------------------------------------------------------------------

/// Every column of the penguin table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Species,
    Island,
    BillLengthMm,
    BillDepthMm,
    FlipperLengthMm,
    BodyMassG,
    Sex,
    Year,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Species,
        Column::Island,
        Column::BillLengthMm,
        Column::BillDepthMm,
        Column::FlipperLengthMm,
        Column::BodyMassG,
        Column::Sex,
        Column::Year,
    ];

    /// Schema name of the column, as it appears in the CSV header.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Species => "species",
            Column::Island => "island",
            Column::BillLengthMm => "bill_length_mm",
            Column::BillDepthMm => "bill_depth_mm",
            Column::FlipperLengthMm => "flipper_length_mm",
            Column::BodyMassG => "body_mass_g",
            Column::Sex => "sex",
            Column::Year => "year",
        }
    }
}

/// A single table cell. Missing values mirror the `NA` markers of the CSV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Text(&'static str),
    Float(f64),
    Integer(i64),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Ordering used by the sortable grid: numbers numerically, text
    /// lexically, missing cells last.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        use Cell::*;
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Greater,
            (_, Missing) => Ordering::Less,
            (Text(a), Text(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Text(_), _) => Ordering::Greater,
            (_, Text(_)) => Ordering::Less,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Missing => write!(f, "NA"),
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute – the numeric columns a chart can be drawn over
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::BillLength,
        Attribute::BillDepth,
        Attribute::FlipperLength,
        Attribute::BodyMass,
    ];

    pub fn column(&self) -> Column {
        match self {
            Attribute::BillLength => Column::BillLengthMm,
            Attribute::BillDepth => Column::BillDepthMm,
            Attribute::FlipperLength => Column::FlipperLengthMm,
            Attribute::BodyMass => Column::BodyMassG,
        }
    }

    pub fn column_name(&self) -> &'static str {
        self.column().name()
    }

    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.column_name() == name)
    }

    /// The measurement this attribute reads from a record.
    pub fn value(&self, record: &PenguinRecord) -> Option<f64> {
        match self {
            Attribute::BillLength => record.bill_length_mm,
            Attribute::BillDepth => record.bill_depth_mm,
            Attribute::FlipperLength => record.flipper_length_mm,
            Attribute::BodyMass => record.body_mass_g,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// One observed penguin. Any field may be missing; only the measurements,
/// sex and year accept unparseable cells as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PenguinRecord {
    pub species: Option<Species>,
    pub island: Option<Island>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub flipper_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub body_mass_g: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub sex: Option<Sex>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub year: Option<i64>,
}

impl PenguinRecord {
    pub fn cell(&self, column: Column) -> Cell {
        fn float(v: Option<f64>) -> Cell {
            v.map_or(Cell::Missing, Cell::Float)
        }
        match column {
            Column::Species => self.species.map_or(Cell::Missing, |s| Cell::Text(s.name())),
            Column::Island => self.island.map_or(Cell::Missing, |i| Cell::Text(i.name())),
            Column::BillLengthMm => float(self.bill_length_mm),
            Column::BillDepthMm => float(self.bill_depth_mm),
            Column::FlipperLengthMm => float(self.flipper_length_mm),
            Column::BodyMassG => float(self.body_mass_g),
            Column::Sex => self.sex.map_or(Cell::Missing, |s| Cell::Text(s.name())),
            Column::Year => self.year.map_or(Cell::Missing, Cell::Integer),
        }
    }

    /// Whether every column of this record is missing.
    pub fn is_all_missing(&self) -> bool {
        Column::ALL.iter().all(|&c| self.cell(c).is_missing())
    }
}

// ---------------------------------------------------------------------------
// PenguinTable – the dataset, or any filtered subset of it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PenguinTable {
    records: Vec<PenguinRecord>,
}

impl PenguinTable {
    pub fn from_records(records: Vec<PenguinRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PenguinRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PenguinRecord> {
        self.records.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows where `attribute` is missing.
    pub fn missing_count(&self, attribute: Attribute) -> usize {
        self.records
            .iter()
            .filter(|r| attribute.value(r).is_none())
            .count()
    }

    /// Present values of `attribute`, in row order.
    pub fn values(&self, attribute: Attribute) -> Vec<f64> {
        self.records.iter().filter_map(|r| attribute.value(r)).collect()
    }
}
