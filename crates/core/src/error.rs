use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixerError {
    #[error("directory {0} does not exist")]
    InputMissing(PathBuf),
    #[error("{0} is not a directory")]
    InputNotDirectory(PathBuf),
    #[error("input directory {0} is empty")]
    InputEmpty(PathBuf),
    #[error("directory {0} already exists")]
    OutputExists(PathBuf),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixerError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The path the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::InputMissing(path)
            | Self::InputNotDirectory(path)
            | Self::InputEmpty(path)
            | Self::OutputExists(path)
            | Self::Io { path, .. } => path,
        }
    }
}

pub type Result<T, E = FixerError> = std::result::Result<T, E>;

/// Attach the offending path to an `io::Result`.
pub(crate) trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|err| FixerError::io(path, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = FixerError::OutputExists(PathBuf::from("/out"));
        assert_eq!(err.to_string(), "directory /out already exists");
        assert_eq!(err.path(), Path::new("/out"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let io: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.at(Path::new("/out/page.md")).unwrap_err();
        assert_eq!(err.path(), Path::new("/out/page.md"));
        assert_eq!(err.to_string(), "/out/page.md: denied");
    }
}
