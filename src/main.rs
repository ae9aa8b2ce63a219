use clap::Parser;
use resume_bandit::config::Config;
use resume_bandit::logging::init_tracing;
use resume_bandit::ui::{self, RunOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "resume-bandit",
    version,
    about = "Generate interview questions from a candidate profile"
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the question-generation service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Start with an empty form instead of the saved one
    #[arg(long)]
    no_restore: bool,

    /// Log filter, e.g. "debug" or "resume_bandit=trace"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
    }
    if let Err(err) = config.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    init_tracing(&config.logging, cli.log_level.as_deref());

    let options = RunOptions {
        no_restore: cli.no_restore,
    };
    if let Err(err) = ui::run(config, options) {
        tracing::error!(error = %err, "Resume Bandit failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
