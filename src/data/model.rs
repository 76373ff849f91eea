use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// FieldValue – a single cell of a sample row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. Every cell in the CSV is either a number
/// (it parsed as `f64`) or the trimmed original text (it did not).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Interpret the cell as a number. Text cells yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    /// Parse a raw cell: number if the trimmed text parses as `f64`,
    /// otherwise the trimmed text itself.
    pub fn parse(raw: &str) -> FieldValue {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(v) => FieldValue::Number(v),
            Err(_) => FieldValue::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one timestamped multi-channel sample
// ---------------------------------------------------------------------------

/// A single sample row: column name → cell value. Columns mirror the CSV
/// header; derived magnitude fields are inserted after ingest.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Numeric value of a field, `None` when absent or non-numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(FieldValue::as_number)
    }

    pub fn insert_number(&mut self, name: &str, value: f64) {
        self.fields.insert(name.to_string(), FieldValue::Number(value));
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete ingested recording
// ---------------------------------------------------------------------------

/// Column name of the microsecond timestamp.
pub const TIMESTAMP_COLUMN: &str = "Timestamp_us";

/// Accelerometer axis columns.
pub const ACC_COLUMNS: [&str; 3] = ["AccX", "AccY", "AccZ"];
/// Gyroscope axis columns.
pub const GYRO_COLUMNS: [&str; 3] = ["GyroX", "GyroY", "GyroZ"];

/// Derived accelerometer magnitude column.
pub const ACC_MAGNITUDE: &str = "AccMagnitude";
/// Derived gyroscope magnitude column.
pub const GYRO_MAGNITUDE: &str = "GyroMagnitude";

/// An ordered, immutable sequence of sample records plus the header that
/// produced them. Replaced wholesale on each new ingest; every analysis
/// reads it without mutating it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All sample rows, in file order.
    pub records: Vec<Record>,
    /// Column names in header order, including derived magnitude columns
    /// once those have been computed.
    pub column_names: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>, column_names: Vec<String>) -> Self {
        Dataset {
            records,
            column_names,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `name` is a known column.
    pub fn has_channel(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Extract a named column as a numeric sequence, one value per record.
    /// Cells that are missing or non-numeric become NaN, matching what
    /// arithmetic on such cells would produce. Returns `None` when the
    /// column does not exist at all.
    pub fn channel(&self, name: &str) -> Option<Vec<f64>> {
        if !self.has_channel(name) {
            return None;
        }
        Some(
            self.records
                .iter()
                .map(|r| r.number(name).unwrap_or(f64::NAN))
                .collect(),
        )
    }

    /// Timestamp column in microseconds, NaN for non-numeric cells.
    pub fn timestamps(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| r.number(TIMESTAMP_COLUMN).unwrap_or(f64::NAN))
            .collect()
    }

    /// Register a derived column name (keeps `column_names` authoritative
    /// for `has_channel` after magnitude derivation).
    pub fn add_column(&mut self, name: &str) {
        if !self.has_channel(name) {
            self.column_names.push(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_parses_numbers_and_keeps_text() {
        assert_eq!(FieldValue::parse(" 1.5 "), FieldValue::Number(1.5));
        assert_eq!(FieldValue::parse("-3"), FieldValue::Number(-3.0));
        assert_eq!(
            FieldValue::parse(" hello "),
            FieldValue::Text("hello".to_string())
        );
        assert_eq!(FieldValue::parse(""), FieldValue::Text(String::new()));
    }

    #[test]
    fn channel_extraction_maps_text_cells_to_nan() {
        let mut r1 = Record::default();
        r1.insert_number("AccX", 1.0);
        let mut r2 = Record::default();
        r2.fields
            .insert("AccX".to_string(), FieldValue::Text("bad".to_string()));

        let ds = Dataset::new(vec![r1, r2], vec!["AccX".to_string()]);
        let chan = ds.channel("AccX").unwrap();
        assert_eq!(chan[0], 1.0);
        assert!(chan[1].is_nan());
        assert!(ds.channel("GyroX").is_none());
    }
}
