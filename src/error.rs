use thiserror::Error;

/// Failures surfaced by the analysis core.
///
/// Ingest failures are fatal for that ingest attempt and leave no partial
/// state behind. Everything else in the pipeline is total over its
/// documented domain: degenerate numeric inputs resolve to fallback values
/// or empty results rather than errors, with two exceptions below.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The CSV text could not be read.
    #[error("failed to ingest CSV: {0}")]
    Ingest(#[from] csv::Error),

    /// An analysis was requested for a column the dataset does not have.
    #[error("unknown channel '{0}'")]
    UnknownChannel(String),

    /// A spectrum was requested for a signal too short to transform.
    #[error("signal too short for spectrum analysis ({0} samples, need at least 2)")]
    DegenerateSignal(usize),
}
