use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use whats_new::changelog::{latest_release, select_delta};
use whats_new::config::log_path;
use whats_new::loader::load_catalog;
use whats_new::logging::init_logging;
use whats_new::render::{OutputFormat, render};

#[derive(Parser)]
#[command(name = "whats-new")]
#[command(version, about = "Show the changelog entries a user has not seen yet")]
struct Cli {
    /// Catalog file (JSON array of releases, or {"releases": [...]})
    catalog: PathBuf,

    /// Version previously shown to the user; omit, leave empty or pass "0" for none
    #[arg(long)]
    last_seen: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter directive (e.g. "debug", "whats_new=trace")
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs as JSON lines to the default log file instead of stderr
    #[arg(long)]
    log_file: bool,

    /// Log file location (implies --log-file)
    #[arg(long)]
    log_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_path.or_else(|| cli.log_file.then(log_path));
    let _guard = init_logging(cli.log_level.as_deref(), log_file.as_deref())?;

    let catalog = load_catalog(&cli.catalog)?;
    let delta = select_delta(&catalog, cli.last_seen.as_deref());
    let latest = latest_release(&catalog).map(|release| release.version.as_str());

    info!(
        "Selected {} of {} releases ({:?})",
        delta.releases.len(),
        catalog.len(),
        delta.resolution
    );

    print!("{}", render(cli.format, &delta.releases, latest)?);
    if cli.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
