use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{debug, info};

use crate::models::{Bin, DensityHistogram, OpKind};
use crate::utils::errors::RenderError;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

/// Bar fill, matplotlib's C0
const BAR_COLOUR: RGBColor = hexcolour!(0x1F77B4);
/// Median marker, matplotlib's C1
const MEDIAN_COLOUR: RGBColor = hexcolour!(0xFF7F0E);

pub const CHART_SIZE: (u32, u32) = (1024, 768);

/// `{base}_{TYPE}.png`; an empty base gives `_PUT.png` in the working directory
pub fn output_path(base: &str, kind: OpKind) -> PathBuf {
    PathBuf::from(format!("{}_{}.png", base, kind))
}

/// X position of the median line, pinned to the range end when the median overflows
pub fn median_marker_x(histogram: &DensityHistogram) -> f64 {
    histogram.median.min(histogram.config.range_end() as f64)
}

/// Draw a density histogram with its median marker and write it as PNG
pub fn render_histogram(histogram: &DensityHistogram, path: &Path) -> Result<(), RenderError> {
    let draw_err = |stage: &str, e: &dyn std::fmt::Display| RenderError::Draw {
        path: path.to_path_buf(),
        message: format!("{}: {}", stage, e),
    };

    let x_max = histogram.config.range_end() as f64;
    // Flat input would collapse the y axis
    let y_max = (histogram.max_density() * 1.05).max(f64::EPSILON);

    let marker_x = median_marker_x(histogram);
    if marker_x < histogram.median {
        debug!(
            "{} median {} ns is past the display range, pinning marker at {} ns",
            histogram.kind, histogram.median, x_max
        );
    }

    {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| draw_err("Failed to fill canvas", &e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Histogram of {} request time", histogram.kind),
                ("sans-serif", 32.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
            .map_err(|e| draw_err("Failed to build chart", &e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Duration in ns")
            .y_desc("Request percentage")
            .y_label_formatter(&|v| format!("{:.5}", v))
            .draw()
            .map_err(|e| draw_err("Failed to draw mesh", &e))?;

        chart
            .draw_series(histogram.bins().filter(|bin| bin.count > 0).map(|bin: Bin| {
                Rectangle::new(
                    [(bin.start as f64, 0.0), (bin.end as f64, bin.density)],
                    BAR_COLOUR.filled(),
                )
            }))
            .map_err(|e| draw_err("Failed to draw bars", &e))?;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(marker_x, 0.0), (marker_x, y_max)],
                MEDIAN_COLOUR.stroke_width(2),
            )))
            .map_err(|e| draw_err("Failed to draw median", &e))?;

        root.present()
            .map_err(|e| draw_err("Failed to write image", &e))?;
    }

    info!("🖼️ Wrote {} histogram to {}", histogram.kind, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistogramConfig;
    use crate::services::histogram_service::build_histogram;

    #[test]
    fn test_median_marker_in_range() {
        let histogram = build_histogram(OpKind::Put, &[150, 250], &HistogramConfig::default()).unwrap();
        assert_eq!(median_marker_x(&histogram), 200.0);
        assert_eq!(median_marker_x(&histogram), histogram.median);
    }

    #[test]
    fn test_median_marker_pinned_past_range() {
        let histogram = build_histogram(OpKind::Get, &[100, 4_000, 9_000], &HistogramConfig::default()).unwrap();
        assert_eq!(histogram.median, 4_000.0);
        assert_eq!(median_marker_x(&histogram), 3_000.0);
    }

    #[test]
    fn test_output_path_naming() {
        assert_eq!(output_path("out", OpKind::Put), PathBuf::from("out_PUT.png"));
        assert_eq!(output_path("out", OpKind::Get), PathBuf::from("out_GET.png"));
        assert_eq!(output_path("runs/a", OpKind::Get), PathBuf::from("runs/a_GET.png"));
    }

    #[test]
    fn test_output_path_without_base() {
        assert_eq!(output_path("", OpKind::Put), PathBuf::from("_PUT.png"));
        assert_eq!(output_path("", OpKind::Get), PathBuf::from("_GET.png"));
    }

    #[test]
    fn test_colours() {
        assert_eq!(BAR_COLOUR, RGBColor(0x1F, 0x77, 0xB4));
        assert_eq!(MEDIAN_COLOUR, RGBColor(0xFF, 0x7F, 0x0E));
    }
}
