use std::fmt;
use std::ops::AddAssign;

/// Counts of what a copy produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub directories: usize,
    pub text_files: usize,
    pub binary_files: usize,
}

impl CopySummary {
    pub fn files(&self) -> usize {
        self.text_files + self.binary_files
    }
}

impl AddAssign for CopySummary {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.text_files += other.text_files;
        self.binary_files += other.binary_files;
    }
}

impl fmt::Display for CopySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files ({} text, {} binary)",
            self.directories,
            self.files(),
            self.text_files,
            self.binary_files
        )
    }
}
