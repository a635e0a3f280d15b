// errors.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::scraper::ScraperError;

/// Errors that end an import or export run.
/// Per-field extraction problems never show up here; they degrade to `None`.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no listings found in source document")]
    NoListings,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Scraper(#[from] ScraperError),
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }
}
