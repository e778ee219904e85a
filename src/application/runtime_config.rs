use std::path::PathBuf;

use crate::cli::Cli;
use crate::filesystem::RootPrefix;

pub const DEFAULT_INPUT_PATH: &str = "/project/.project_tree.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "/project/project_tree_formatted.txt";
pub const DEFAULT_ROOT_PREFIX: &str = "/project";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub root_prefix: RootPrefix,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input,
            output_path: cli.output,
            root_prefix: RootPrefix::new(cli.root),
        }
    }
}
