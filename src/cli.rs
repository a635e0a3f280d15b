// cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    AgentExportConfig, AgentScrapeConfig, ImportConfig, SegmenterKind, DEFAULT_AGENTS_ENDPOINT,
    DEFAULT_CURRENCY,
};
use crate::errors::ImportError;

#[derive(Debug, Parser)]
#[command(author, version, about = "Realtor directory scraping and listing import tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn a saved property search page into SQL insert statements
    Inserts(InsertsArgs),
    /// Agent directory tools
    #[command(subcommand)]
    Agents(AgentsCommand),
}

#[derive(Debug, Args)]
pub struct InsertsArgs {
    /// Saved HTML page with the property listings
    #[arg(short, long, env = "LISTINGS_SOURCE")]
    pub input: PathBuf,

    /// Where to write the generated SQL
    #[arg(short, long, env = "LISTINGS_DEST", default_value = "property_imports.sql")]
    pub output: PathBuf,

    /// Account id that owns every imported listing
    #[arg(long, env = "LISTINGS_OWNER_ID")]
    pub owner_id: String,

    /// Currency code printed before prices
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    #[arg(long, value_enum, default_value_t = SegmenterKind::Marker)]
    pub segmenter: SegmenterKind,

    /// Also write the extracted records as JSON
    #[arg(long)]
    pub dump_json: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum AgentsCommand {
    /// Search the directory by name prefix and append new agents to the roster
    Scrape(ScrapeArgs),
    /// Convert the roster to a spreadsheet
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    #[arg(long, default_value = "agents.md")]
    pub roster: PathBuf,

    #[arg(long, env = "AGENTS_ENDPOINT", default_value = DEFAULT_AGENTS_ENDPOINT)]
    pub endpoint: String,

    /// Longest name prefix to search (1 = a..z, 2 = a..zz)
    #[arg(long, default_value_t = 2)]
    pub max_prefix_len: usize,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, default_value = "agents.md")]
    pub roster: PathBuf,

    #[arg(short, long, default_value = "agents.xlsx")]
    pub output: PathBuf,
}

impl From<InsertsArgs> for ImportConfig {
    fn from(args: InsertsArgs) -> Self {
        let mut config = ImportConfig::new(args.input, args.output, args.owner_id);
        config.currency = args.currency;
        config.segmenter = args.segmenter;
        config.dump_json = args.dump_json;
        config
    }
}

impl TryFrom<ScrapeArgs> for AgentScrapeConfig {
    type Error = ImportError;

    fn try_from(args: ScrapeArgs) -> Result<Self, Self::Error> {
        let mut config = AgentScrapeConfig::new(&args.endpoint, args.roster)?;
        config.max_prefix_len = args.max_prefix_len;
        Ok(config)
    }
}

impl From<ExportArgs> for AgentExportConfig {
    fn from(args: ExportArgs) -> Self {
        AgentExportConfig {
            roster_path: args.roster,
            dest_path: args.output,
        }
    }
}
