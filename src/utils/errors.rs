use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::models::OpKind;

/// Errors raised while reading a timing log
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid duration '{value}' on line {line}: {source}")]
    InvalidDuration {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("No {kind} timings found in input")]
    EmptyDataset { kind: OpKind },
}

/// Errors raised while binning or drawing a histogram
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot build a {kind} histogram from an empty sequence")]
    EmptySequence { kind: OpKind },
    #[error("Failed to draw {}: {message}", .path.display())]
    Draw { path: PathBuf, message: String },
}

/// Errors raised while showing an image interactively
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Viewer command is empty")]
    EmptyCommand,
    #[error("Failed to launch viewer '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Viewer '{command}' exited with {status}")]
    Exit { command: String, status: ExitStatus },
}

/// Top-level error for the histogram command
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
}

/// Flatten an error and its sources into a single log line
///
/// `"Invalid duration 'x' on line 3: invalid digit found in string"` style
/// messages already embed their source, so repeated text is not appended twice.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
