use std::path::PathBuf;

use tracing::{info, warn};

use super::Cli;
use crate::models::{DensityHistogram, HistogramConfig, OpKind};
use crate::services::viewer_service::ViewerCommand;
use crate::services::{chart_service, histogram_service, loader_service, viewer_service};
use crate::utils::errors::AppError;

/// Load the timing log, then render (and optionally show) one histogram per operation
///
/// Returns the written image paths, PUT first.
pub fn execute(args: &Cli) -> Result<Vec<PathBuf>, AppError> {
    let mut dataset = loader_service::load_csv(&args.input)?;
    dataset.sort();

    // Resolve the viewer up front so a bad HISTOGRAM_VIEWER fails before any drawing
    let viewer = if args.show {
        Some(ViewerCommand::from_env()?)
    } else {
        None
    };

    let config = HistogramConfig::default();
    let mut written = Vec::with_capacity(OpKind::ALL.len());

    for kind in OpKind::ALL {
        let histogram = histogram_service::build_histogram(kind, dataset.durations(kind), &config)?;
        log_summary(&histogram);

        let path = chart_service::output_path(args.output_base(), kind);
        chart_service::render_histogram(&histogram, &path)?;

        if let Some(viewer) = &viewer {
            viewer_service::show_image(&path, viewer)?;
        }

        written.push(path);
    }

    Ok(written)
}

fn log_summary(histogram: &DensityHistogram) {
    info!(
        "{}: {} samples, min {} ns, median {} ns, max {} ns",
        histogram.kind, histogram.total, histogram.min, histogram.median, histogram.max
    );

    if histogram.overflow > 0 {
        warn!(
            "{}: {} of {} samples are at or past {} ns and were counted in the last bin",
            histogram.kind,
            histogram.overflow,
            histogram.total,
            histogram.config.range_end()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::LoadError;
    use std::fs;
    use std::path::Path;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("latency-histogram-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cli(input: &Path, output: Option<&Path>) -> Cli {
        Cli {
            input: input.to_path_buf(),
            output: output.map(|p| p.to_string_lossy().into_owned()),
            show: false,
        }
    }

    #[test]
    fn test_renders_both_histograms() {
        let dir = scratch_dir("render");
        let input = dir.join("timings.csv");
        fs::write(&input, "PUT;150\nPUT;250\nGET;300\nbad;row;extra-ignored\n;\n").unwrap();

        let base = dir.join("out");
        let written = execute(&cli(&input, Some(&base))).unwrap();

        assert_eq!(written, vec![dir.join("out_PUT.png"), dir.join("out_GET.png")]);
        for path in &written {
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']), "{} is not a PNG", path.display());
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_get_only_input_writes_nothing() {
        let dir = scratch_dir("get-only");
        let input = dir.join("timings.csv");
        fs::write(&input, "GET;100\nGET;200\n").unwrap();

        let base = dir.join("out");
        let err = execute(&cli(&input, Some(&base))).unwrap_err();

        assert!(matches!(err, AppError::Load(LoadError::EmptyDataset { kind: OpKind::Put })));
        assert!(!dir.join("out_PUT.png").exists());
        assert!(!dir.join("out_GET.png").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = scratch_dir("missing");
        let err = execute(&cli(&dir.join("nope.csv"), None)).unwrap_err();

        assert!(matches!(err, AppError::Load(LoadError::Open { .. })));
        let _ = fs::remove_dir_all(&dir);
    }
}
