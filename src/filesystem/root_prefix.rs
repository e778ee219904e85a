use tracing::debug;

/// The directory all listed paths are rendered relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPrefix {
    prefix: String,
}

impl RootPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Strips the prefix from `path`.
    ///
    /// Returns `None` for the root itself. Paths not rooted under the prefix
    /// are passed through unchanged.
    pub fn relativize<'a>(&self, path: &'a str) -> Option<&'a str> {
        if path == self.prefix {
            return None;
        }

        match path
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(relative) => Some(relative),
            None => {
                debug!("Path '{}' is not under '{}', keeping as-is", path, self.prefix);
                Some(path)
            }
        }
    }
}
