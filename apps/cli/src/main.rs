//! Buckingham CLI - renders catalog parameters and nondimensional groups.

use anyhow::Context;
use buckingham_dimensional::{GroupList, NondimensionalGroup};
use clap::Parser;

mod cli;
mod config;
mod logging;
mod output;
mod problem;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::problem::Problem;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(&cli);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;
    tracing::debug!(format = ?config.format, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Params { filter } => {
            let entries = buckingham_catalog::iter()
                .filter(|(name, _)| filter.as_deref().map_or(true, |f| name.contains(f)));
            output::write_parameters(&mut out, entries, config.format)?;
        }
        Command::Group { params, exponents } => {
            let parameters = params
                .iter()
                .map(|name| {
                    buckingham_catalog::get(name)
                        .with_context(|| format!("Unknown catalog parameter '{name}'"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let group =
                NondimensionalGroup::new(parameters, exponents).context("Failed to build group")?;
            if !group.is_dimensionless() {
                tracing::warn!(rendered = %group, "group is not dimensionless");
            }
            let groups: GroupList = vec![group].into();
            output::write_groups(&mut out, &groups, config.format)?;
        }
        Command::Solve { file } => {
            let problem = Problem::load(&file)
                .with_context(|| format!("Failed to load problem file {}", file.display()))?;
            tracing::info!(
                title = problem.title.as_deref().unwrap_or(""),
                parameters = problem.parameters.len(),
                groups = problem.groups.len(),
                "Problem loaded"
            );
            let groups = problem.groups()?;
            output::write_groups(&mut out, &groups, config.format)?;
        }
    }

    Ok(())
}
