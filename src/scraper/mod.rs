pub mod agents;
pub mod listings;
pub mod models;
mod scraper_error;

pub use agents::AgentDirectory;
pub use listings::{segmenter_for, BlockSegmenter, ListingExtractor};
pub use scraper_error::ScraperError;
