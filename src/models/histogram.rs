//! Histogram binning models

use super::OpKind;

/// Width of a single bin in nanoseconds
pub const BIN_WIDTH_NS: u64 = 100;
/// Number of bins; together with the width this fixes the range to [0, 3000) ns
pub const BIN_COUNT: usize = 30;

/// Fixed, data-independent binning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    pub bin_width: u64,
    pub bin_count: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        HistogramConfig {
            bin_width: BIN_WIDTH_NS,
            bin_count: BIN_COUNT,
        }
    }
}

impl HistogramConfig {
    /// Exclusive upper end of the binned range
    pub fn range_end(&self) -> u64 {
        self.bin_width * self.bin_count as u64
    }

    /// Bin for a duration. Values past the range land in the last bin.
    pub fn bin_index(&self, duration_ns: u64) -> usize {
        let index = duration_ns / self.bin_width;
        (index.min(self.bin_count as u64 - 1)) as usize
    }
}

/// One bar of a histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: u64,
    pub end: u64,
    pub count: u64,
    pub density: f64,
}

/// Density-normalized histogram of one operation's durations
#[derive(Debug, Clone, PartialEq)]
pub struct DensityHistogram {
    pub kind: OpKind,
    pub config: HistogramConfig,
    pub counts: Vec<u64>,
    pub densities: Vec<f64>,
    pub total: usize,
    /// Samples at or beyond `config.range_end()`, already folded into the last bin
    pub overflow: usize,
    pub min: u64,
    pub max: u64,
    pub median: f64,
}

impl DensityHistogram {
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        let width = self.config.bin_width;
        self.counts
            .iter()
            .zip(&self.densities)
            .enumerate()
            .map(move |(i, (&count, &density))| Bin {
                start: i as u64 * width,
                end: (i as u64 + 1) * width,
                count,
                density,
            })
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// Total bar area, 1.0 for any non-empty histogram
    pub fn area(&self) -> f64 {
        self.densities.iter().sum::<f64>() * self.config.bin_width as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let config = HistogramConfig::default();
        assert_eq!(config.bin_width, 100);
        assert_eq!(config.bin_count, 30);
        assert_eq!(config.range_end(), 3000);
    }

    #[test]
    fn test_bin_index_clamps_overflow() {
        let config = HistogramConfig::default();
        assert_eq!(config.bin_index(0), 0);
        assert_eq!(config.bin_index(99), 0);
        assert_eq!(config.bin_index(100), 1);
        assert_eq!(config.bin_index(2999), 29);
        assert_eq!(config.bin_index(3000), 29);
        assert_eq!(config.bin_index(u64::MAX), 29);
    }
}
