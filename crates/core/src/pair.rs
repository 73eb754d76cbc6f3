use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::copier::cleaned_path;
use crate::error::{FixerError, IoResultExt, Result};

/// One export to fix: copy `input` to `output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirPair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl DirPair {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Where the output root actually ends up once its id suffix is removed.
    pub fn cleaned_output(&self) -> PathBuf {
        cleaned_path(&self.output)
    }

    /// Checks that the pair can be copied without touching existing data.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(FixerError::InputMissing(self.input.clone()));
        }
        if !self.input.is_dir() {
            return Err(FixerError::InputNotDirectory(self.input.clone()));
        }

        let cleaned = self.cleaned_output();
        for output in [&self.output, &cleaned] {
            if output.exists() {
                return Err(FixerError::OutputExists(output.clone()));
            }
        }

        if is_empty_dir(&self.input)? {
            return Err(FixerError::InputEmpty(self.input.clone()));
        }

        Ok(())
    }
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    Ok(std::fs::read_dir(path).at(path)?.next().is_none())
}
