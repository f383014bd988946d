//! Row field lookup and multi-value cell splitting.
//!
//! # Responsibility
//! - Expose one CSV row as a case/whitespace-insensitive header lookup.
//! - Split multi-valued cells into trimmed, non-empty pieces.
//!
//! # Invariants
//! - `field` lookups normalize the requested name exactly like stored
//!   headers, so `field("Project Type")` and `field(" project type ")`
//!   resolve identically.
//! - Duplicate header names resolve to the last occurrence in the sheet.

use csv::StringRecord;
use std::collections::HashMap;

/// Delimiters accepted inside multi-valued cells.
pub const MULTI_VALUE_DELIMITERS: [char; 3] = [',', ';', '|'];

/// Normalizes a header or lookup name to its canonical key form.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Splits a multi-valued cell on the accepted delimiter set.
///
/// Pieces are trimmed and empty pieces dropped, so the split is idempotent
/// on already-clean input: `"Asia; Americas"` yields `["Asia", "Americas"]`,
/// `""` yields `[]`, `"A,,B"` yields `["A", "B"]`.
pub fn split_multi(value: &str) -> Vec<String> {
    value
        .split(&MULTI_VALUE_DELIMITERS[..])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// One parsed CSV row exposed as a normalized header->value lookup.
///
/// Internal to the loader; render code only ever sees typed records.
#[derive(Debug, Clone)]
pub struct RowFields {
    values: HashMap<String, String>,
}

impl RowFields {
    /// Builds the lookup from a header record and its matching data record.
    ///
    /// Cells beyond the header width are ignored; cells missing from a short
    /// record read as empty. Later duplicate headers overwrite earlier ones.
    pub fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let mut values = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("").trim().to_string();
            values.insert(normalize_key(header), value);
        }
        Self { values }
    }

    /// Looks up one cell by header name, returning `""` when absent.
    pub fn field(&self, name: &str) -> &str {
        self.values
            .get(&normalize_key(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns the first non-empty cell among the given header aliases.
    pub fn first_of(&self, names: &[&str]) -> &str {
        names
            .iter()
            .map(|name| self.field(name))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Returns whether every cell in this row is empty.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|value| value.is_empty())
    }
}
