// config.rs
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::errors::ImportError;

pub const DEFAULT_CURRENCY: &str = "JMD";
pub const DEFAULT_AGENTS_ENDPOINT: &str = "https://realtorsjamaica.org/wp-admin/admin-ajax.php";

/// Which strategy turns the page into listing blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SegmenterKind {
    /// Split on the literal container tag. Tolerates broken markup.
    #[default]
    Marker,
    /// Parse the page and select listing containers.
    Dom,
}

/// Everything one `inserts` run needs. Built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    /// Account that owns every imported listing.
    pub owner_id: String,
    pub currency: String,
    pub segmenter: SegmenterKind,
    pub dump_json: Option<PathBuf>,
}

impl ImportConfig {
    pub fn new(
        source_path: impl Into<PathBuf>,
        dest_path: impl Into<PathBuf>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            dest_path: dest_path.into(),
            owner_id: owner_id.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            segmenter: SegmenterKind::default(),
            dump_json: None,
        }
    }

    pub fn validate(&self) -> Result<(), ImportError> {
        if self.owner_id.trim().is_empty() {
            return Err(ImportError::Config("owner id must not be empty".into()));
        }
        if self.currency.trim().is_empty() {
            return Err(ImportError::Config("currency must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AgentScrapeConfig {
    pub endpoint: Url,
    pub roster_path: PathBuf,
    pub max_prefix_len: usize,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    /// Upper bound of the random extra delay added to each retry.
    pub retry_jitter: Duration,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl AgentScrapeConfig {
    pub fn new(endpoint: &str, roster_path: impl Into<PathBuf>) -> Result<Self, ImportError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ImportError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ImportError::Config(format!(
                "endpoint must be http(s), got '{}'",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            endpoint,
            roster_path: roster_path.into(),
            max_prefix_len: 2,
            max_attempts: 5,
            retry_delay: Duration::from_secs(3),
            retry_jitter: Duration::from_secs(1),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(90),
        })
    }

    /// `https://host` part of the endpoint, sent as `Origin`.
    pub fn origin(&self) -> String {
        self.endpoint.origin().ascii_serialization()
    }

    pub fn referer(&self) -> String {
        format!("{}/find-a-realtor/", self.origin())
    }
}

#[derive(Debug, Clone)]
pub struct AgentExportConfig {
    pub roster_path: PathBuf,
    pub dest_path: PathBuf,
}
