pub mod histogram;

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot PUT/GET request duration histograms from a timing log", long_about = None)]
pub struct Cli {
    /// Semicolon-delimited timing log, one `LABEL;DURATION_NS` row per request
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Base path for the images; `_PUT.png` and `_GET.png` are appended
    #[arg(short, long, value_name = "BASE", value_hint = ValueHint::FilePath)]
    pub output: Option<String>,

    /// Open each image in a viewer and wait for it to be closed
    #[arg(long, action = ArgAction::SetTrue)]
    pub show: bool,
}

impl Cli {
    /// Output base, empty when `-o` was not given
    pub fn output_base(&self) -> &str {
        self.output.as_deref().unwrap_or("")
    }
}
