// import.rs
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::ImportConfig;
use crate::db::inserts::render_script;
use crate::domain::{ListingRecord, NormalizedInsertRow};
use crate::errors::ImportError;
use crate::scraper::{BlockSegmenter, ListingExtractor};

/// Result of turning one page into an insert script, before anything touches disk.
#[derive(Debug)]
pub struct GeneratedScript {
    pub records: Vec<ListingRecord>,
    pub rows: Vec<NormalizedInsertRow>,
    pub sql: String,
}

#[derive(Debug)]
pub struct ImportReport {
    pub inserts_written: usize,
    pub output: PathBuf,
}

/// Pure core of the import: document text in, SQL text out.
///
/// Fails only with `NoListings` when the segmenter finds no blocks.
pub fn generate_script(
    document: &str,
    config: &ImportConfig,
    segmenter: &dyn BlockSegmenter,
) -> Result<GeneratedScript, ImportError> {
    let extractor = ListingExtractor::new(&config.currency)?;

    let blocks = segmenter.segment(document)?;
    debug!("segmented document into {} blocks", blocks.len());
    if blocks.is_empty() {
        return Err(ImportError::NoListings);
    }

    let records = extractor.extract_all(&blocks);

    let rows: Vec<NormalizedInsertRow> = records
        .iter()
        .map(|r| NormalizedInsertRow::from_record(r, &config.owner_id, &config.currency))
        .collect();

    let sql = render_script(&rows);

    Ok(GeneratedScript { records, rows, sql })
}

/// Reads the source page, generates the script and writes it in one go.
/// Nothing is written when no listings are found.
pub fn run_import(
    config: &ImportConfig,
    segmenter: &dyn BlockSegmenter,
) -> Result<ImportReport, ImportError> {
    config.validate()?;

    let document = fs::read_to_string(&config.source_path)
        .map_err(|e| ImportError::io(&config.source_path, e))?;
    info!("Read {} bytes from {}", document.len(), config.source_path.display());

    let script = generate_script(&document, config, segmenter)?;

    if let Some(dump_path) = &config.dump_json {
        let json = serde_json::to_string_pretty(&script.records)?;
        fs::write(dump_path, json).map_err(|e| ImportError::io(dump_path, e))?;
        debug!("dumped {} records to {}", script.records.len(), dump_path.display());
    }

    fs::write(&config.dest_path, &script.sql).map_err(|e| ImportError::io(&config.dest_path, e))?;

    info!("Wrote {} inserts to {}", script.rows.len(), config.dest_path.display());

    Ok(ImportReport {
        inserts_written: script.rows.len(),
        output: config.dest_path.clone(),
    })
}
