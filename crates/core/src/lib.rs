pub mod classify;
pub mod copier;
pub mod error;
pub mod observer;
pub mod pair;
pub mod pattern;
pub mod runner;
pub mod summary;
#[cfg(test)]
mod testutils;

pub use classify::{classify_file, is_text_file, ContentKind};
pub use copier::{cleaned_path, copy_and_clean};
pub use error::{FixerError, Result};
pub use observer::{CopyEvent, CopyObserver, NullObserver};
pub use pair::DirPair;
pub use pattern::{clean_line, clean_name, clean_os_name};
pub use runner::{run_pairs, RunOptions};
pub use summary::CopySummary;
