use std::path::Path;

use crate::classify::ContentKind;
use crate::error::FixerError;
use crate::summary::CopySummary;

/// Progress and failure events raised while fixing an export.
#[derive(Debug, Clone, Copy)]
pub enum CopyEvent<'a> {
    /// A directory pair passed validation and is about to be copied.
    PairStarted { input: &'a Path, output: &'a Path },
    /// Dry run: the pair is valid and would be copied.
    PairValidated { input: &'a Path, output: &'a Path },
    /// The copier entered a source directory.
    EnteringDirectory { source: &'a Path, target: &'a Path },
    FileCopied {
        source: &'a Path,
        target: &'a Path,
        kind: ContentKind,
    },
    /// Neither a regular file nor a directory (socket, FIFO, device); not copied.
    EntrySkipped { path: &'a Path },
    PairFinished {
        input: &'a Path,
        output: &'a Path,
        summary: &'a CopySummary,
    },
    /// The run is about to halt.
    Fatal { error: &'a FixerError },
}

/// Receives events from the copier and the pair runner.
pub trait CopyObserver {
    fn on_event(&mut self, event: CopyEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl CopyObserver for NullObserver {
    fn on_event(&mut self, _event: CopyEvent<'_>) {}
}
