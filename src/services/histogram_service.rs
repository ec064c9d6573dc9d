use tracing::debug;

use crate::models::{DensityHistogram, HistogramConfig, OpKind};
use crate::utils::errors::RenderError;

/// Statistical median of an ascending slice
///
/// Even-length input yields the mean of the two middle values.
pub fn median(sorted: &[u64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

/// Bin `sorted` into fixed-width buckets and normalize to a density
pub fn build_histogram(
    kind: OpKind,
    sorted: &[u64],
    config: &HistogramConfig,
) -> Result<DensityHistogram, RenderError> {
    let (min, max, median) = match (sorted.first(), sorted.last(), median(sorted)) {
        (Some(&min), Some(&max), Some(median)) => (min, max, median),
        _ => return Err(RenderError::EmptySequence { kind }),
    };

    let range_end = config.range_end();
    let mut counts = vec![0u64; config.bin_count];
    let mut overflow = 0usize;

    for &duration in sorted {
        if duration >= range_end {
            overflow += 1;
        }
        counts[config.bin_index(duration)] += 1;
    }

    let total = sorted.len();
    let scale = total as f64 * config.bin_width as f64;
    let densities = counts.iter().map(|&count| count as f64 / scale).collect();

    let histogram = DensityHistogram {
        kind,
        config: *config,
        counts,
        densities,
        total,
        overflow,
        min,
        max,
        median,
    };

    debug!(
        "{} histogram: {} samples, {} past {} ns, area {:.6}",
        kind,
        total,
        overflow,
        range_end,
        histogram.area()
    );

    Ok(histogram)
}
