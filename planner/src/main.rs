//! Tokenomics Planner
//!
//! Evaluates a project's vesting schedule and valuation, writes the results
//! as JSON and optionally keeps re-evaluating while the project file changes.

mod cli;
mod config;
mod error;
mod output;
mod project;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use project::Project;
use std::time::Duration;
use tokio::time;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => Config::write_default(&path),
        Command::Template { name, out } => write_template(&name, out),
        Command::Run { project } => {
            let config = load_config(cli.config.as_deref())?;
            run_once(&config, project.as_deref().unwrap_or(&config.project_path)).await
        }
        Command::Watch { project } => {
            let config = load_config(cli.config.as_deref())?;
            let path = project.unwrap_or_else(|| config.project_path.clone());
            watch(&config, &path).await
        }
    }
}

/// An explicit config path must load; the implicit one falls back to defaults
fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(p) => Config::load(Some(p)),
        None => Ok(Config::load(None).unwrap_or_else(|_| {
            log::warn!("Failed to load config, using default local config");
            Config::default_local()
        })),
    }
}

fn write_template(name: &str, out: Option<String>) -> Result<()> {
    let project = Project::from_template(name)?;
    let path = out.unwrap_or_else(|| format!("{}.toml", name.to_lowercase()));
    project.save(&path)?;
    log::info!("Created {} project at {}", name, path);
    Ok(())
}

async fn run_once(config: &Config, path: &str) -> Result<()> {
    let project = Project::load(path)?;
    evaluate(&project, config).await
}

/// Evaluate, print the summary and write outputs
async fn evaluate(project: &Project, config: &Config) -> Result<()> {
    let evaluation = service::evaluate_project(project, config).await?;

    println!("{}", output::render_summary(&evaluation));

    if let Some(valuation) = &evaluation.valuation {
        for risk in &valuation.risks {
            log::warn!("[{:?}] {}", risk.category, risk.message);
        }
    }

    if config.write_outputs {
        let written = output::write_outputs(&evaluation, &config.output_dir)
            .context("Failed to write outputs")?;
        log::info!("Wrote {} files to {}", written.len(), config.output_dir);
    }

    Ok(())
}

async fn watch(config: &Config, path: &str) -> Result<()> {
    log::info!("Watching {} every {}s", path, config.poll_interval_secs);

    let mut last: Option<Project> = None;
    let mut interval = time::interval(Duration::from_secs(config.poll_interval_secs.max(1)));

    loop {
        interval.tick().await;

        let project = match Project::load(path) {
            Ok(project) => project,
            Err(e) => {
                log::error!("Error loading project: {}", e);
                continue;
            }
        };

        if last.as_ref() == Some(&project) {
            continue;
        }

        log::info!("Project changed, re-evaluating");
        if let Err(e) = evaluate(&project, config).await {
            log::error!("Error evaluating project: {:#}", e);
        }
        last = Some(project);
    }
}
