use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

/// A flat listing of paths, one per line, as read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathList {
    paths: Vec<String>,
}

impl PathList {
    pub async fn read(path: &Path) -> Result<Self, LoadError> {
        debug!("Reading path list from {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.to_path_buf(),
        })?;
        debug!("Successfully read path list: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(DecodeSnafu {
            file_path: path.to_path_buf(),
        })?;
        Ok(contents.as_str().into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<&str> for PathList {
    fn from(contents: &str) -> Self {
        // Blank and whitespace-only lines are dropped, everything else is kept verbatim
        let paths = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self { paths }
    }
}

#[derive(Debug, Snafu)]
pub enum LoadError {
    #[snafu(display("Failed to read the path list: {}", file_path.display()))]
    ReadError {
        file_path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("The path list is not valid UTF-8: {}", file_path.display()))]
    DecodeError {
        file_path: PathBuf,
        source: FromUtf8Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("", &[])]
    #[case("\n\n\n", &[])]
    #[case("   \n\t\n", &[])]
    #[case("/project\n", &["/project"])]
    #[case("/project\n\n/project/src", &["/project", "/project/src"])]
    #[case("/project\r\n/project/a\r\n", &["/project", "/project/a"])]
    #[case("  /project/indented\n", &["  /project/indented"])]
    fn parses_lines(#[case] contents: &str, #[case] expected: &[&str]) {
        let list = PathList::from(contents);
        assert_eq!(list.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn keeps_input_order() {
        let list = PathList::from("/b\n/a\n/c\n");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["/b", "/a", "/c"]);
        assert_eq!(list.len(), 3);
    }

    #[compio::test]
    async fn reads_list_from_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "/project\n/project/src\n\n/project/src/main.ext\n")
            .expect("Failed to write to temp file");

        let list = PathList::read(temp_file.path())
            .await
            .expect("Failed to read path list");

        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["/project", "/project/src", "/project/src/main.ext"]
        );
    }

    #[compio::test]
    async fn empty_file_yields_empty_list() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");

        let list = PathList::read(temp_file.path())
            .await
            .expect("Failed to read path list");

        assert!(list.is_empty());
    }

    #[compio::test]
    async fn returns_error_on_nonexistent_file() {
        let result = PathList::read(Path::new("/this/path/does/not/exist.txt")).await;
        assert!(matches!(result, Err(LoadError::ReadError { .. })));
    }

    #[compio::test]
    async fn returns_error_on_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(&[0x2f, 0xff, 0xfe, 0x0a])
            .expect("Failed to write to temp file");

        let result = PathList::read(temp_file.path()).await;
        assert!(matches!(result, Err(LoadError::DecodeError { .. })));
    }

    #[test]
    fn read_error_display_names_the_file() {
        let error = LoadError::ReadError {
            file_path: PathBuf::from("/missing/list.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let message = format!("{}", error);
        assert!(message.contains("Failed to read the path list"));
        assert!(message.contains("/missing/list.txt"));
    }
}
