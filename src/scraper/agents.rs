// agents.rs
use std::time::Duration;

use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use tracing::{debug, error, info, warn};

use crate::config::AgentScrapeConfig;
use crate::db::roster::Roster;
use crate::domain::AgentRecord;
use crate::errors::ImportError;
use crate::scraper::models::{AgentsResponse, ApiAgent};
use crate::scraper::ScraperError;

const USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 18_5 like Mac OS X)";

/// Blocking client for the realtor directory search endpoint.
pub struct AgentDirectory {
    client: Client,
    endpoint: url::Url,
}

impl AgentDirectory {
    pub fn new(config: &AgentScrapeConfig) -> Result<Self, ScraperError> {
        let header = |v: String| {
            HeaderValue::from_str(&v).map_err(|e| ScraperError::Config(format!("bad header {v}: {e}")))
        };

        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(ORIGIN, header(config.origin())?);
        headers.insert(REFERER, header(config.referer())?);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// One search request for agents whose first name starts with `prefix`.
    pub fn search(&self, prefix: &str) -> Result<Vec<ApiAgent>, ScraperError> {
        let form = [
            ("action", "get_api_agents"),
            ("first_name", prefix),
            ("company", ""),
            ("designation", ""),
        ];

        let resp = self.client.post(self.endpoint.clone()).form(&form).send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: AgentsResponse =
            serde_json::from_str(&text).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

        Ok(parsed.into_agents())
    }
}

/// `a`..`z`, then `aa`..`zz`, and so on up to `max_len` letters.
pub fn name_prefixes(max_len: usize) -> impl Iterator<Item = String> {
    (1..=max_len).flat_map(|len| {
        let total = 26usize.pow(len as u32);
        (0..total).map(move |mut n| {
            let mut chars = vec!['a'; len];
            for slot in chars.iter_mut().rev() {
                *slot = (b'a' + (n % 26) as u8) as char;
                n /= 26;
            }
            chars.into_iter().collect()
        })
    })
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub prefixes_searched: usize,
    pub prefixes_abandoned: usize,
    pub agents_seen: usize,
    pub agents_added: usize,
    /// Licences on the roster once the walk is done.
    pub roster_size: usize,
}

/// Walks every prefix, appending agents the roster has not seen yet.
///
/// Timeouts are retried up to `max_attempts`; any other failure abandons the
/// prefix and the walk moves on.
pub fn scrape_agents<I, F>(
    prefixes: I,
    config: &AgentScrapeConfig,
    roster: &mut Roster,
    mut fetch: F,
) -> Result<ScrapeSummary, ImportError>
where
    I: IntoIterator<Item = String>,
    F: FnMut(&str) -> Result<Vec<ApiAgent>, ScraperError>,
{
    let mut summary = ScrapeSummary::default();

    for prefix in prefixes {
        summary.prefixes_searched += 1;
        info!("Searching prefix: {}", prefix.to_uppercase());

        let mut attempt = 0;
        loop {
            attempt += 1;

            match fetch(&prefix) {
                Ok(agents) => {
                    debug!(prefix = %prefix, count = agents.len(), "search returned");
                    summary.agents_seen += agents.len();

                    for api_agent in &agents {
                        let agent = AgentRecord::from_api(api_agent);
                        if roster.admit(&agent)? {
                            summary.agents_added += 1;
                            info!("NEW: {}", agent.full_name());
                        }
                    }
                    break;
                }
                Err(ScraperError::Timeout(msg)) if attempt < config.max_attempts => {
                    warn!("Timeout on prefix {prefix} (attempt {attempt}): {msg}, retrying");
                    std::thread::sleep(retry_pause(config));
                }
                Err(e) => {
                    error!("Giving up on prefix {prefix}: {e}");
                    summary.prefixes_abandoned += 1;
                    break;
                }
            }
        }

        roster.flush()?;
    }

    summary.roster_size = roster.len();
    info!("Roster now holds {} agents", summary.roster_size);

    Ok(summary)
}

fn retry_pause(config: &AgentScrapeConfig) -> Duration {
    let jitter_ms = config.retry_jitter.as_millis() as u64;
    let jitter = rand::thread_rng().gen_range(0..=jitter_ms);
    config.retry_delay + Duration::from_millis(jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::models::{AgentLicence, ContactNumber};
    use std::collections::HashMap;

    fn api_agent(first: &str, licence: &str, mobile: Option<&str>) -> ApiAgent {
        ApiAgent {
            first_name: Some(first.to_string()),
            last_name: Some("Smith".to_string()),
            email: Some(format!("{first}@example.com")),
            agent: Some(AgentLicence {
                agent_licence_no: Some(licence.to_string()),
            }),
            contact_number: Some(ContactNumber {
                mobile: mobile.map(str::to_string),
                home: None,
            }),
        }
    }

    fn quick_config(roster: &std::path::Path) -> AgentScrapeConfig {
        let mut cfg = AgentScrapeConfig::new("https://example.com/ajax", roster).unwrap();
        cfg.retry_delay = Duration::ZERO;
        cfg.retry_jitter = Duration::ZERO;
        cfg
    }

    #[test]
    fn prefixes_enumerate_by_length() {
        let all: Vec<String> = name_prefixes(2).collect();
        assert_eq!(all.len(), 26 + 26 * 26);
        assert_eq!(all[0], "a");
        assert_eq!(all[25], "z");
        assert_eq!(all[26], "aa");
        assert_eq!(all[27], "ab");
        assert_eq!(all.last().map(String::as_str), Some("zz"));
        assert_eq!(name_prefixes(0).count(), 0);
    }

    #[test]
    fn dedupes_and_skips_agents_without_phone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents.md");
        let cfg = quick_config(&path);
        let mut roster = Roster::open(&path).unwrap();

        let mut pages: HashMap<&str, Vec<ApiAgent>> = HashMap::new();
        pages.insert("a", vec![api_agent("Ann", "R1", Some("876")), api_agent("Al", "R2", None)]);
        pages.insert("b", vec![api_agent("Ann", "r1", Some("876")), api_agent("Bo", "", Some("1"))]);
        pages.insert("c", vec![api_agent("Cy", "R3", Some("555"))]);

        let summary = scrape_agents(
            ["a", "b", "c", "d"].map(String::from),
            &cfg,
            &mut roster,
            |p| Ok(pages.remove(p).unwrap_or_default()),
        )
        .unwrap();

        assert_eq!(summary.prefixes_searched, 4);
        assert_eq!(summary.agents_seen, 5);
        assert_eq!(summary.agents_added, 2);
        assert_eq!(summary.roster_size, 2);

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("- ANN SMITH | LICENCE: R1 |"));
        assert!(lines[1].starts_with("- CY SMITH | LICENCE: R3 |"));
    }

    #[test]
    fn stalled_response_is_a_timeout() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (_stream, _) = listener.accept().unwrap();
            std::thread::sleep(Duration::from_secs(2));
        });

        let mut cfg = AgentScrapeConfig::new(&format!("http://{addr}/ajax"), "agents.md").unwrap();
        cfg.read_timeout = Duration::from_millis(300);
        let directory = AgentDirectory::new(&cfg).unwrap();

        let err = directory.search("a").unwrap_err();
        assert!(matches!(err, ScraperError::Timeout(_)), "got {err:?}");
        server.join().unwrap();
    }

    #[test]
    fn refused_connection_is_not_retried() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let cfg = AgentScrapeConfig::new(&format!("http://{addr}/ajax"), "agents.md").unwrap();
        let directory = AgentDirectory::new(&cfg).unwrap();

        let err = directory.search("a").unwrap_err();
        assert!(matches!(err, ScraperError::Network(_)), "got {err:?}");
    }

    #[test]
    fn retries_timeouts_but_not_other_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents.md");
        let cfg = quick_config(&path);
        let mut roster = Roster::open(&path).unwrap();

        let mut calls: HashMap<String, u32> = HashMap::new();
        let summary = scrape_agents(
            ["slow", "broken", "dead"].map(String::from),
            &cfg,
            &mut roster,
            |p| {
                let n = calls.entry(p.to_string()).or_default();
                *n += 1;
                match (p, *n) {
                    ("slow", 1..=2) => Err(ScraperError::Timeout("read".into())),
                    ("slow", _) => Ok(vec![api_agent("Sue", "R7", Some("1"))]),
                    ("broken", _) => Err(ScraperError::JsonParse("eof".into())),
                    _ => Err(ScraperError::Timeout("read".into())),
                }
            },
        )
        .unwrap();

        assert_eq!(calls["slow"], 3);
        assert_eq!(calls["broken"], 1);
        assert_eq!(calls["dead"], cfg.max_attempts);
        assert_eq!(summary.agents_added, 1);
        assert_eq!(summary.prefixes_abandoned, 2);
    }
}
