use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use notion_fixer::{logging, Config, TracingObserver};
use notion_fixer_core::{run_pairs, DirPair, FixerError, RunOptions};

#[derive(Parser)]
#[command(name = "notion-fixer")]
#[command(version)]
#[command(about = "Copy a Notion export, stripping the ids Notion appends to names and links")]
struct Cli {
    #[arg(
        short,
        long,
        env = "NOTION_FIXER_CONFIG",
        help = "Settings file [default: appsettings.json next to the executable]"
    )]
    config: Option<PathBuf>,
    #[arg(short, long, requires = "output", help = "Export to fix (instead of the settings file)")]
    input: Option<PathBuf>,
    #[arg(short, long, requires = "input", help = "Where to write the fixed copy")]
    output: Option<PathBuf>,
    #[arg(long, help = "Validate every pair without copying anything")]
    dry_run: bool,
    #[arg(long, value_name = "SHELL", exclusive = true, help = "Print shell completions and exit")]
    completions: Option<Shell>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "notion-fixer", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    logging::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Copy failures were already reported by the observer.
            if err.downcast_ref::<FixerError>().is_none() {
                tracing::error!("{:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let pairs = resolve_pairs(cli)?;
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    let total = run_pairs(&pairs, options, &mut TracingObserver)?;
    if !cli.dry_run {
        tracing::info!("Done: {}", total);
    }
    Ok(())
}

fn resolve_pairs(cli: &Cli) -> Result<Vec<DirPair>> {
    if let (Some(input), Some(output)) = (&cli.input, &cli.output) {
        return Ok(vec![DirPair::new(input, output)]);
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    Ok(Config::load(&path)?.app_settings.dir_pairs)
}
