use crate::data::model::{Column, PenguinRecord, PenguinTable};

/// Ascending or descending order of the sortable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Which grid column is sorted, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSort {
    pub column: usize,
    pub direction: SortDirection,
}

impl GridSort {
    /// Next sort state after a click on the header of `column`:
    /// ascending, then descending, then unsorted.
    pub fn cycle(current: Option<GridSort>, column: usize) -> Option<GridSort> {
        match current {
            Some(GridSort {
                column: c,
                direction: SortDirection::Ascending,
            }) if c == column => Some(GridSort {
                column,
                direction: SortDirection::Descending,
            }),
            Some(GridSort {
                column: c,
                direction: SortDirection::Descending,
            }) if c == column => None,
            _ => Some(GridSort {
                column,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

/// Header names plus formatted cells, ready for a table widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TableArtifact {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableArtifact {
    fn from_records<'a>(records: impl IntoIterator<Item = &'a PenguinRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|r| Column::ALL.iter().map(|&c| r.cell(c).to_string()).collect())
            .collect();
        Self {
            columns: Column::ALL.iter().map(Column::name).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every row of the filtered table, in dataset order. Never gated: an empty
/// table still yields the column headers.
pub fn table_view(table: &PenguinTable) -> TableArtifact {
    TableArtifact::from_records(table.iter())
}

/// Like [`table_view`], ordered by the grid's sort column when one is set.
pub fn grid_view(table: &PenguinTable, sort: Option<GridSort>) -> TableArtifact {
    let mut records: Vec<&PenguinRecord> = table.iter().collect();
    if let Some(sort) = sort {
        if let Some(&column) = Column::ALL.get(sort.column) {
            // Stable sort keeps dataset order among equal cells. Missing
            // cells stay at the bottom in both directions.
            records.sort_by(|a, b| {
                let (a, b) = (a.cell(column), b.cell(column));
                let ord = a.sort_cmp(&b);
                match sort.direction {
                    SortDirection::Descending if !a.is_missing() && !b.is_missing() => {
                        ord.reverse()
                    }
                    _ => ord,
                }
            });
        }
    }
    TableArtifact::from_records(records)
}
