use crate::copier::copy_and_clean;
use crate::error::Result;
use crate::observer::{CopyEvent, CopyObserver};
use crate::pair::DirPair;
use crate::summary::CopySummary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Validate every pair but copy nothing.
    pub dry_run: bool,
}

/// Process pairs strictly in order, validating each one right before it is
/// copied. The first failure is reported to the observer as
/// [`CopyEvent::Fatal`] and returned; later pairs are not touched.
pub fn run_pairs<O: CopyObserver + ?Sized>(
    pairs: &[DirPair],
    options: RunOptions,
    observer: &mut O,
) -> Result<CopySummary> {
    let result = process(pairs, options, observer);
    if let Err(error) = &result {
        observer.on_event(CopyEvent::Fatal { error });
    }
    result
}

fn process<O: CopyObserver + ?Sized>(
    pairs: &[DirPair],
    options: RunOptions,
    observer: &mut O,
) -> Result<CopySummary> {
    let mut total = CopySummary::default();

    for pair in pairs {
        pair.validate()?;

        let (input, output) = (pair.input.as_path(), pair.output.as_path());
        if options.dry_run {
            observer.on_event(CopyEvent::PairValidated { input, output });
            continue;
        }

        observer.on_event(CopyEvent::PairStarted { input, output });
        let summary = copy_and_clean(input, output, observer)?;
        observer.on_event(CopyEvent::PairFinished {
            input,
            output,
            summary: &summary,
        });
        total += summary;
    }

    Ok(total)
}
