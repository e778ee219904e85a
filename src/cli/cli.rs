use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;
use crate::application::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_ROOT_PREFIX};

/// Render a flat list of paths as an indented tree
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File containing one absolute path per line
    #[clap(long, short, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// File the rendered tree is written to
    #[clap(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Directory the listed paths are rendered relative to
    #[clap(long, short, default_value = DEFAULT_ROOT_PREFIX)]
    pub root: String,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
