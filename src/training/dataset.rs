//! Labelled training data loaded from CSV.

use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelledText {
    pub text: String,
    /// Class value exactly as it appears in the file ("0", "1", "pos", ...).
    pub raw_label: String,
}

impl LabelledText {
    pub fn new(text: impl Into<String>, raw_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw_label: raw_label.into(),
        }
    }
}

/// Reads `text_column` / `label_column` from a headed CSV file.
///
/// Rows with an empty label are skipped; a missing column is an error.
pub fn load_csv(path: &Path, text_column: &str, label_column: &str) -> Result<Vec<LabelledText>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open training data: {:?}", path))?;

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| anyhow!("Column '{}' not found in {:?}", name, path))
    };
    let text_idx = column(text_column)?;
    let label_idx = column(label_column)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to parse CSV row {}", line + 2))?;
        let text = record.get(text_idx).unwrap_or_default();
        let label = record.get(label_idx).unwrap_or_default().trim();
        if label.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(LabelledText::new(text, label));
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} rows without a label", skipped);
    }
    tracing::info!("Loaded {} labelled rows from {:?}", rows.len(), path);
    Ok(rows)
}
