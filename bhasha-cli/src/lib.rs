//! Line-delimited JSON batch driver for the detector.
//!
//! Reads `{"id": .., "text": ..}` records, classifies each text and writes
//! one result object per line in input order.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bhasha_core::{ConfigError, DetectionResult, DetectorConfig, Language, LanguageDetector};
use rayon::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Records detected together per parallel chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// One input line.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    #[serde(default)]
    pub id: serde_json::Value,
    /// Missing and `null` texts both take the empty-input path.
    #[serde(default)]
    pub text: Option<String>,
}

/// Totals reported once a batch completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub records: usize,
    pub blank_lines: usize,
    pub languages: BTreeMap<Language, usize>,
}

impl BatchSummary {
    fn record(&mut self, result: &DetectionResult) {
        self.records += 1;
        *self.languages.entry(result.primary_language).or_insert(0) += 1;
    }
}

/// Classify every record from `reader` and write results to `writer`.
///
/// Blank lines are skipped. The first malformed line aborts the batch with
/// its 1-based line number.
pub fn run_batch<R, W>(
    detector: &LanguageDetector<'_>,
    reader: R,
    mut writer: W,
    chunk_size: usize,
) -> Result<BatchSummary, BatchError>
where
    R: BufRead,
    W: Write,
{
    let chunk_size = chunk_size.max(1);
    let mut summary = BatchSummary::default();
    let mut pending: Vec<InputRecord> = Vec::with_capacity(chunk_size);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            summary.blank_lines += 1;
            continue;
        }

        let record: InputRecord = serde_json::from_str(&line)
            .map_err(|source| BatchError::Json { line: idx + 1, source })?;
        pending.push(record);

        if pending.len() >= chunk_size {
            write_chunk(detector, &mut pending, &mut writer, &mut summary)?;
        }
    }

    write_chunk(detector, &mut pending, &mut writer, &mut summary)?;
    writer.flush()?;
    Ok(summary)
}

fn write_chunk<W: Write>(
    detector: &LanguageDetector<'_>,
    pending: &mut Vec<InputRecord>,
    writer: &mut W,
    summary: &mut BatchSummary,
) -> Result<(), BatchError> {
    if pending.is_empty() {
        return Ok(());
    }

    let results: Vec<DetectionResult> = std::mem::take(pending)
        .into_par_iter()
        .map(|record| {
            detector
                .detect_optional(record.text.as_deref())
                .with_id(record.id)
        })
        .collect();
    debug!(count = results.len(), "detected chunk");

    for result in &results {
        serde_json::to_writer(&mut *writer, result).map_err(BatchError::Encode)?;
        writer.write_all(b"\n")?;
        summary.record(result);
    }
    Ok(())
}

/// Load the detector config at `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<DetectorConfig, BatchError> {
    match path {
        Some(path) => {
            debug!(config = %path.display(), "loading detector config");
            Ok(DetectorConfig::from_path(path)?)
        }
        None => Ok(DetectorConfig::default()),
    }
}

/// Run a batch from `in_path` into `out_path`, replacing any existing output.
pub fn run_files(
    detector: &LanguageDetector<'_>,
    in_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    chunk_size: usize,
) -> Result<BatchSummary, BatchError> {
    let in_path = in_path.as_ref();
    let out_path = out_path.as_ref();
    info!(input = %in_path.display(), output = %out_path.display(), "starting batch");

    let reader = BufReader::new(File::open(in_path)?);
    let writer = BufWriter::new(File::create(out_path)?);
    run_batch(detector, reader, writer, chunk_size)
}
