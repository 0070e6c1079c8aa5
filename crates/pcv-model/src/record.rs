//! Row-oriented records extracted from delimited files.

use std::collections::BTreeMap;

use crate::columns::Column;

/// One data row, keyed by the header's column names.
///
/// Values are stored as read. Lookups through [`Record::value`] treat
/// blank cells as absent, which is how every builder reads the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { fields }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw cell value, including blank cells.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Trimmed cell value; `None` when the column is missing or blank.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.raw(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Value of a known column, trying each dialect alias in order.
    pub fn get<C: Column>(&self, column: C) -> Option<&str> {
        column
            .aliases()
            .iter()
            .find_map(|alias| self.value(alias))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed file: header plus data rows in file order.
///
/// `headers` keeps the file's column order and is only filled by
/// extraction. A table collected from records has no headers, since a
/// [`Record`] does not remember column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            headers: Vec::new(),
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::VariantColumn;

    #[test]
    fn blank_values_are_absent() {
        let record = Record::from_pairs([("Gene symbol", "  "), ("HGVS", " c.1A>G ")]);
        assert_eq!(record.raw("Gene symbol"), Some("  "));
        assert_eq!(record.value("Gene symbol"), None);
        assert_eq!(record.value("HGVS"), Some("c.1A>G"));
        assert_eq!(record.value("Missing"), None);
    }

    #[test]
    fn column_lookup_tries_aliases() {
        let legacy = Record::from_pairs([("#Local ID", "abc")]);
        let current = Record::from_pairs([("##Local ID", "def")]);
        assert_eq!(legacy.get(VariantColumn::LocalId), Some("abc"));
        assert_eq!(current.get(VariantColumn::LocalId), Some("def"));
        assert_eq!(legacy.get(VariantColumn::VariantType), None);
    }

    #[test]
    fn collected_table_has_no_headers() {
        let table: Table = vec![
            Record::from_pairs([("Stop", "1"), ("Chromosome", "2")]),
            Record::from_pairs([("Stop", "3"), ("Chromosome", "4")]),
        ]
        .into_iter()
        .collect();
        assert!(table.headers.is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(table.first().and_then(|row| row.value("Stop")), Some("1"));
    }
}
