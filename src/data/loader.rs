use std::io::Read;

use anyhow::{Context, Result, bail, ensure};

use super::model::{Column, PenguinRecord, PenguinTable};

/// The Palmer Penguins dataset, bundled into the binary.
const PENGUINS_CSV: &str = include_str!("../../data/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the bundled penguins dataset.
pub fn load_penguins() -> Result<PenguinTable> {
    let table = load_csv(PENGUINS_CSV.as_bytes()).context("parsing bundled penguins.csv")?;
    ensure!(!table.is_empty(), "bundled penguins dataset has no rows");
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the column names of [`Column::ALL`]
/// (order free). Measurement, sex and year cells that do not parse,
/// including `NA`, load as missing. An unknown species or island is an
/// error, since such a row could never be selected.
pub fn load_csv<R: Read>(reader: R) -> Result<PenguinTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in Column::ALL {
        if !headers.iter().any(|h| h == column.name()) {
            bail!("CSV missing '{}' column", column.name());
        }
    }

    let mut records = Vec::new();
    // Data rows are numbered from 1, after the header.
    for (row_no, result) in reader.deserialize::<PenguinRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        records.push(record);
    }

    Ok(PenguinTable::from_records(records))
}
