use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_json::Value;

/// Column carrying the match identifier.
pub const MATCH_ID_COLUMN: &str = "matchId";

/// Column carrying the national roster flag.
pub const KOREA_COLUMN: &str = "korea";

/// One side of one match as a flat `column -> value` record.
///
/// Columns keep insertion order. A row only holds the stats its side
/// reported; there is no fill value for columns seen on other rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlatRow(IndexMap<String, Value>);

impl FlatRow {
    pub(crate) fn set(&mut self, column: impl Into<String>, value: Value) {
        self.0.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn match_id(&self) -> Option<&str> {
        self.get(MATCH_ID_COLUMN).and_then(Value::as_str)
    }

    /// `"Y"` or `"N"`.
    pub fn korea(&self) -> Option<&str> {
        self.get(KOREA_COLUMN).and_then(Value::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rows in input match order, two per match (side 0 then side 1).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlatTable {
    rows: Vec<FlatRow>,
}

impl FlatTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn extend(&mut self, rows: impl IntoIterator<Item = FlatRow>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of every row's columns, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.columns())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<FlatRow> for FlatTable {
    fn from_iter<I: IntoIterator<Item = FlatRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FlatTable {
    type Item = &'a FlatRow;
    type IntoIter = std::slice::Iter<'a, FlatRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
