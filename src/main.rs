use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use lh2gh::config::Config;
use lh2gh::error::ErrorKind;

#[derive(Parser)]
#[command(
    name = "lh2gh",
    version,
    about = "Convert issues exported from Lighthouse to the GitHub import format"
)]
struct Cli {
    /// Lighthouse export directory, holding tickets/ and milestones/
    srcdir: PathBuf,
    /// Output directory; must not exist yet or be empty
    destdir: PathBuf,
    /// Renumber tickets 1 to N while converting
    #[arg(long, value_name = "N", requires = "remap_offset")]
    remap_until: Option<u64>,
    /// Add M to every renumbered ticket
    #[arg(long, value_name = "M", requires = "remap_until")]
    remap_offset: Option<u64>,
    /// Tab-separated file mapping author names to usernames; a '*' line sets
    /// the fallback username
    #[arg(long, value_name = "FILE")]
    user_map: Option<PathBuf>,
    /// Base URL of the source project, cited in renumbered issues
    #[arg(long, value_name = "URL")]
    project_url: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            source_dir: self.srcdir,
            dest_dir: self.destdir,
            remap_until: self.remap_until,
            remap_offset: self.remap_offset,
            user_map: self.user_map,
            project_url: self.project_url,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match lh2gh::run(&cli.into_config()) {
        Ok(summary) => {
            info!(
                "converted {} issues with {} comments and {} milestones ({} spam tickets skipped)",
                summary.issues, summary.comments, summary.milestones, summary.skipped_spam
            );
        }
        Err(e) => {
            match e.kind() {
                ErrorKind::Config | ErrorKind::Data => error!("{e}"),
                ErrorKind::Unexpected => error!("unexpected error: {e}"),
            }
            std::process::exit(1);
        }
    }
}
