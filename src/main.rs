use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{AgentsCommand, Cli, Command};
use crate::config::{AgentExportConfig, AgentScrapeConfig, ImportConfig};
use crate::db::roster::Roster;
use crate::errors::ImportError;
use crate::scraper::agents::{name_prefixes, scrape_agents};
use crate::scraper::{segmenter_for, AgentDirectory};

mod cli;
mod config;
mod db;
mod domain;
mod errors;
mod import;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listings_import=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Inserts(args) => {
            let config = ImportConfig::from(args);
            let segmenter = segmenter_for(config.segmenter);

            match import::run_import(&config, segmenter.as_ref()) {
                Ok(report) => {
                    println!(
                        "Wrote {} inserts to {}",
                        report.inserts_written,
                        report.output.display()
                    );
                    Ok(())
                }
                Err(ImportError::NoListings) => {
                    println!("No listings found.");
                    Err(ImportError::NoListings)
                        .with_context(|| format!("reading {}", config.source_path.display()))
                }
                Err(e) => Err(e).context("listing import failed"),
            }
        }

        Command::Agents(AgentsCommand::Scrape(args)) => {
            let config = AgentScrapeConfig::try_from(args)?;
            let directory = AgentDirectory::new(&config).context("building HTTP client")?;
            let mut roster = Roster::open(&config.roster_path)?;

            let summary = scrape_agents(
                name_prefixes(config.max_prefix_len),
                &config,
                &mut roster,
                |prefix| directory.search(prefix),
            )
            .context("agent scrape failed")?;

            println!(
                "Done. Added {} new agents ({} on roster, {} prefixes searched, {} abandoned).",
                summary.agents_added,
                summary.roster_size,
                summary.prefixes_searched,
                summary.prefixes_abandoned
            );
            Ok(())
        }

        Command::Agents(AgentsCommand::Export(args)) => {
            let config: AgentExportConfig = args.into();
            let total = spreadsheets::export_agents_xlsx(&config).context("agent export failed")?;
            println!("Total agents: {total}");
            Ok(())
        }
    }
}
