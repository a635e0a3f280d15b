use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        // only a stalled response is worth retrying; a connect timeout is not
        if e.is_timeout() && !e.is_connect() {
            ScraperError::Timeout(e.to_string())
        } else if e.is_decode() {
            ScraperError::JsonParse(e.to_string())
        } else {
            ScraperError::Network(e.to_string())
        }
    }
}
