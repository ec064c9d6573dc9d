//! Data models shared by the loader, the histogram builder and the renderer

pub mod histogram;
pub mod timing;

pub use histogram::{Bin, DensityHistogram, HistogramConfig};
pub use timing::{OpKind, TimingDataset, TimingRecord};
