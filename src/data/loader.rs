use csv::ReaderBuilder;
use log::debug;

use super::model::{Dataset, FieldValue, Record};
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// CSV ingestion
// ---------------------------------------------------------------------------

/// Parse raw CSV text into a [`Dataset`].
///
/// Layout: a header row of column names, then one sample per line. Every
/// cell is parsed as `f64`; cells that do not parse are kept as trimmed
/// text (never coerced to zero). Short rows pad missing trailing columns
/// with empty text.
///
/// Quoting is disabled on purpose: the logger that produces these files
/// writes plain comma-joined values, so a comma is always a delimiter.
/// Embedded commas in a field are unsupported.
///
/// A file with a header but no data rows yields an empty dataset, not an
/// error.
pub fn parse_csv(text: &str) -> Result<Dataset, AnalysisError> {
    let mut reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .from_reader(text.trim().as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(|h| h.trim().to_string()).collect(),
        // No header line at all (empty input) → empty dataset.
        Err(_) => return Ok(Dataset::default()),
    };
    if headers.iter().all(|h| h.is_empty()) {
        return Ok(Dataset::default());
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::default();
        for (idx, name) in headers.iter().enumerate() {
            let cell = row.get(idx).unwrap_or("");
            record
                .fields
                .insert(name.clone(), FieldValue::parse(cell));
        }
        records.push(record);
    }

    debug!(
        "parsed {} records with {} columns",
        records.len(),
        headers.len()
    );
    Ok(Dataset::new(records, headers))
}
