use anyhow::Result;
use clap::Parser;

use git_versioning::domain::is_blank;
use git_versioning::{load_config, release_mode, ui, VersioningError};

#[derive(clap::Parser)]
#[command(
    name = "git-versioning",
    about = "Compute the display version of a build from its tag state"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Candidate next tag")]
    next: Option<String>,

    #[arg(short, long, default_value = "", help = "Most recent tag")]
    last: String,

    #[arg(long, help = "Tag or branch marker of the current build")]
    current: Option<String>,

    #[arg(short, long, help = "Override the configured snapshot suffix")]
    snapshot: Option<String>,

    #[arg(short, long, help = "Override the configured release mode")]
    mode: Option<String>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(args) {
        Ok(version) => ui::display_version(version.as_deref()),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<Option<String>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(snapshot) = args.snapshot {
        config.snapshot = snapshot;
    }
    if let Some(mode) = args.mode {
        config.release_mode = mode;
    }

    let current = args.current.as_deref();
    let next = match args.next.as_deref() {
        Some(next) => next,
        None if is_blank(current) => "",
        None => {
            return Err(VersioningError::invalid_argument(
                "--next is required when the current tag is not blank",
            )
            .into())
        }
    };

    let mode = release_mode(&config.release_mode)?;
    if args.verbose {
        ui::display_status(&format!("Using release mode '{}'", mode.name()));
    }

    Ok(mode.display_version(next, &args.last, current, &config))
}
