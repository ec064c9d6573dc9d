use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::models::{OpKind, TimingDataset, TimingRecord};
use crate::utils::errors::LoadError;

/// Load a `LABEL;DURATION_NS` timing log from disk
pub fn load_csv(path: &Path) -> Result<TimingDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    info!("📂 Reading timings from {}", path.display());
    load_from_reader(file)
}

/// Parse a timing log from any reader
///
/// Rows need a non-empty label and a second field, anything shorter is
/// skipped. Both PUT and GET must end up with at least one sample.
pub fn load_from_reader<R: Read>(reader: R) -> Result<TimingDataset, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut dataset = TimingDataset::default();
    let mut skipped = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        let row = result?;
        let line = row
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);

        match parse_row(&row, line)? {
            Some(record) => dataset.push(record),
            None => skipped += 1,
        }
    }

    info!(
        "Loaded {} PUT and {} GET timings ({} rows skipped)",
        dataset.len(OpKind::Put),
        dataset.len(OpKind::Get),
        skipped
    );

    if let Some(kind) = dataset.first_empty() {
        return Err(LoadError::EmptyDataset { kind });
    }

    Ok(dataset)
}

fn parse_row(row: &StringRecord, line: u64) -> Result<Option<TimingRecord>, LoadError> {
    let (label, duration) = match (row.get(0), row.get(1)) {
        (Some(label), Some(duration)) if !label.is_empty() => (label, duration),
        _ => {
            debug!("Skipping short row on line {}: {:?}", line, row);
            return Ok(None);
        }
    };

    match duration.parse::<u64>() {
        Ok(duration_ns) => Ok(Some(TimingRecord {
            kind: OpKind::from_label(label),
            duration_ns,
        })),
        Err(source) if OpKind::is_known_label(label) => Err(LoadError::InvalidDuration {
            line,
            value: duration.to_string(),
            source,
        }),
        Err(_) => {
            warn!(
                "Skipping line {}: unknown label '{}' without a numeric duration",
                line, label
            );
            Ok(None)
        }
    }
}
