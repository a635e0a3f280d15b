// src/domain/listing.rs

use serde::Serialize;

/// One property listing as found in the source page, before any derivation.
/// Every field is optional: a missing pattern means "unknown", never a default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub detail_url: Option<String>,
    pub image_url: Option<String>,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    /// Raw "Parish, Town" text, split later by the normalizer.
    pub location_text: Option<String>,
    pub title_main: Option<String>,
    pub type_label: Option<String>,
    /// Digits only, thousands separators already stripped.
    pub price_text: Option<String>,
    pub mls_code: Option<String>,
    pub description_text: Option<String>,
    pub bedroom_count: Option<u32>,
    pub bathroom_count: Option<u32>,
    pub area_square_feet: Option<u64>,
    pub status_badge_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Commercial,
    Apartment,
    House,
    Rent,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Commercial => "commercial",
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Rent => "rent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Available,
    UnderContract,
    UnderOffer,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::UnderContract => "under_contract",
            ListingStatus::UnderOffer => "under_offer",
        }
    }
}
