//! deploypack CLI
//!
//! Usage: deploypack <LOAD_DIR> <GIT_BASE_DIR> <BRANCH> <APP_VERSION> <PACKAGE_TYPE>

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use deploypack::config;
use deploypack::infrastructure::{archiver_for, GitCli, LocalFs};
use deploypack::logging;
use deploypack::presentation::{Cli, ConsoleEventSink, STARTUP_LINE};
use deploypack::PackageUseCase;

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("{}", STARTUP_LINE);

    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let (config, warnings) = config::load_or_default(&work_dir, cli.config.as_deref())?;
    let config = cli.apply_overrides(config);

    logging::init(&config.logging, cli.verbose, &work_dir)?;
    let span = tracing::info_span!("run", pid = std::process::id());
    let _guard = span.enter();

    for warning in &warnings {
        warn!("{}", warning);
    }
    info!(
        match_policy = %config.manifest.match_policy,
        archive_format = %config.package.archive_format(),
        "configuration loaded"
    );

    let request = cli.request();
    let vcs = GitCli::new(work_dir.join(&request.repo_dir));
    let fs = LocalFs::new();
    let archiver = archiver_for(config.package.archive_format());
    let sink = ConsoleEventSink::stdout(config.logging.file.clone());

    let now = chrono::Local::now().naive_local();
    PackageUseCase::new(&vcs, &fs, archiver.as_ref(), &config, &work_dir)
        .execute(&request, now, &sink)?;

    Ok(())
}
