pub mod agent;
pub mod listing;
pub mod logic;
pub mod normalize;

pub use agent::{AgentRecord, AgentRow};
pub use listing::ListingRecord;
pub use normalize::NormalizedInsertRow;
