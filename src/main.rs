// ABOUTME: Entry point for the slipway CLI application.
// ABOUTME: Parses arguments and drives the release pipeline end to end.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use slipway::config::{self, Config};
use slipway::error::Result;
use slipway::notify::{DesktopNotifier, Notifier};
use slipway::output::{Output, OutputMode};
use slipway::release::{Release, ReleaseError};
use slipway::remote::{HttpForge, HttpScheduler, Session, TagOps};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)
        }
        Commands::Release { quiet, json } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;

            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Normal
            };

            release(config, Output::new(mode)).await
        }
        Commands::Status => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            status(config).await
        }
    }
}

/// Drive the release pipeline end to end.
///
/// Exits through `Err` on every fatal stage failure; a deployment that never
/// reaches running is a failure too, so only a live deployment exits 0.
async fn release(config: Config, mut out: Output) -> Result<()> {
    out.start_timer();
    let app = config.project.name.clone();

    out.stage(&format!("Signing in to {}...", config.forge.host));
    let forge_password = config.forge.password.resolve()?;
    let session = Session::login(&config.forge, &forge_password)
        .await
        .map_err(|e| ReleaseError::AuthenticationFailure {
            host: config.forge.host.clone(),
            reason: e.to_string(),
        })?;
    let forge = HttpForge::new(&session, config.project.path.clone());

    let latest = forge
        .latest_tag()
        .await
        .map_err(|e| ReleaseError::TagLookupFailure {
            reason: e.to_string(),
        })?;

    let release = Release::plan(latest)?;
    out.stage(&format!(
        "Releasing {} (previous {})",
        release.target(),
        release.previous()
    ));

    out.stage("Creating tag...");
    let release = release.create_tag(&forge).await?;

    out.stage("Watching build log...");
    let release = release
        .watch_build(&forge, &config.polling.build_policy())
        .await?;
    out.stage(&format!("Image built: {}", release.artifact()));

    let scheduler_password = config.scheduler.password.resolve()?;
    let scheduler = HttpScheduler::new(&config.scheduler, &scheduler_password);

    out.stage(&format!("Submitting image to {}...", config.scheduler.host));
    let release = release.submit_image(&scheduler, &app).await?;

    out.stage("Waiting for deployment...");
    let release = release
        .await_running(
            &scheduler,
            &app,
            config.polling.visibility_timeout,
            &config.polling.deploy_policy(),
        )
        .await?;

    if let Err(e) = DesktopNotifier
        .notify("Release deployed", release.origin())
        .await
    {
        tracing::warn!("notification failed: {e}");
    }

    out.success(&format!(
        "Deployed {} at {}",
        release.target(),
        release.origin()
    ));
    Ok(())
}

/// Show the resolved configuration and the forge's current latest tag.
async fn status(config: Config) -> Result<()> {
    println!("Project: {} ({})", config.project.name, config.project.path);
    println!("Forge: {}", config.forge.origin());
    println!("Scheduler: {}", config.scheduler.origin());

    let password = config.forge.password.resolve()?;
    let session = Session::login(&config.forge, &password)
        .await
        .map_err(|e| ReleaseError::AuthenticationFailure {
            host: config.forge.host.clone(),
            reason: e.to_string(),
        })?;
    let forge = HttpForge::new(&session, config.project.path.clone());

    let latest = forge
        .latest_tag()
        .await
        .map_err(|e| ReleaseError::TagLookupFailure {
            reason: e.to_string(),
        })?;
    println!("Latest tag: {latest}");

    Ok(())
}
