use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures while building a catalog from external JSON.
///
/// Searching itself never fails; these only surface at the loading boundary.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog entry {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}
