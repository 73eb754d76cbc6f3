use notion_fixer_core::{ContentKind, CopyEvent, CopyObserver};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

/// Forwards copy events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CopyObserver for TracingObserver {
    fn on_event(&mut self, event: CopyEvent<'_>) {
        match event {
            CopyEvent::PairStarted { input, output } => {
                tracing::info!(
                    "Processing input {} to output {}",
                    input.display(),
                    output.display()
                );
            }
            CopyEvent::PairValidated { input, output } => {
                tracing::info!(
                    "Dry run: would process input {} to output {}",
                    input.display(),
                    output.display()
                );
            }
            CopyEvent::EnteringDirectory { source, target } => {
                tracing::info!("Copying {} to {}", source.display(), target.display());
            }
            CopyEvent::FileCopied {
                source,
                target,
                kind,
            } => {
                let how = match kind {
                    ContentKind::Text => "rewrote",
                    ContentKind::Binary => "copied",
                };
                tracing::debug!("{} {} -> {}", how, source.display(), target.display());
            }
            CopyEvent::EntrySkipped { path } => {
                tracing::warn!("Skipping {}: not a regular file", path.display());
            }
            CopyEvent::PairFinished {
                output, summary, ..
            } => {
                tracing::info!("Finished {}: {}", output.display(), summary);
            }
            CopyEvent::Fatal { error } => {
                tracing::error!(path = %error.path().display(), "{}", error);
            }
        }
    }
}
