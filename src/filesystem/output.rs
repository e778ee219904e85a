use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

/// Writes `contents` to `path`, creating or truncating the file.
pub async fn write_output(path: &Path, contents: String) -> Result<(), WriteError> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    let res = fs::write(path, contents.into_bytes()).await;
    res.0.context(WriteSnafu {
        file_path: path.to_path_buf(),
    })
}

#[derive(Debug, Snafu)]
pub enum WriteError {
    #[snafu(display("Failed to write the formatted tree: {}", file_path.display()))]
    WriteError {
        file_path: PathBuf,
        source: std::io::Error,
    },
}
