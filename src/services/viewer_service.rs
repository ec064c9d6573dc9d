use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::utils::errors::ViewerError;

/// Environment variable overriding the image viewer, e.g. `HISTOGRAM_VIEWER="feh -Z"`
pub const VIEWER_ENV: &str = "HISTOGRAM_VIEWER";

/// Program plus leading arguments; the image path is appended last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ViewerCommand {
    /// Split a shell-like command line on whitespace
    pub fn parse(command_line: &str) -> Result<Self, ViewerError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ViewerError::EmptyCommand)?;
        Ok(ViewerCommand {
            program,
            args: parts.collect(),
        })
    }

    /// `HISTOGRAM_VIEWER` if set, otherwise the platform opener
    pub fn from_env() -> Result<Self, ViewerError> {
        match std::env::var(VIEWER_ENV) {
            Ok(command_line) => Self::parse(&command_line),
            Err(_) => Self::parse(platform_default()),
        }
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn platform_default() -> &'static str {
    if cfg!(target_os = "macos") {
        "open -W"
    } else if cfg!(target_os = "windows") {
        "cmd /C start /WAIT"
    } else {
        "xdg-open"
    }
}

/// Open `path` in the viewer and block until the viewer exits
pub fn show_image(path: &Path, viewer: &ViewerCommand) -> Result<(), ViewerError> {
    info!("👀 Opening {} with {}, close the viewer to continue", path.display(), viewer.program);

    let status = Command::new(&viewer.program)
        .args(&viewer.args)
        .arg(path)
        .status()
        .map_err(|source| ViewerError::Spawn {
            command: viewer.display(),
            source,
        })?;

    if !status.success() {
        return Err(ViewerError::Exit {
            command: viewer.display(),
            status,
        });
    }

    Ok(())
}
