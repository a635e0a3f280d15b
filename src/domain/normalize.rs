// src/domain/normalize.rs

use super::listing::{ListingRecord, ListingStatus, PropertyType};
use super::logic::{derive_property_type, derive_status, slugify, split_location, NO_MLS};

/// A listing flattened into the column values of one `public.properties` row.
/// Derived from exactly one `ListingRecord`; holds no reference to other rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInsertRow {
    pub owner_id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub parish: Option<String>,
    pub town: Option<String>,
    pub price: Option<String>,
    pub currency: String,
    pub property_type: PropertyType,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub status: ListingStatus,
    pub image_url: Option<String>,
    pub phone_number: Option<String>,
}

impl NormalizedInsertRow {
    pub fn from_record(record: &ListingRecord, owner_id: &str, currency: &str) -> Self {
        let title = build_title(record.title_main.as_deref(), record.type_label.as_deref());

        let (parish, town) = record
            .location_text
            .as_deref()
            .map(split_location)
            .unwrap_or((None, None));

        let mls = record.mls_code.as_deref().unwrap_or(NO_MLS);
        let slug = slugify(&format!("{} {} {}", title, town.as_deref().unwrap_or(""), mls));

        NormalizedInsertRow {
            owner_id: owner_id.to_string(),
            title,
            slug,
            description: record.description_text.clone(),
            parish,
            town,
            price: record.price_text.clone().filter(|p| !p.is_empty()),
            currency: currency.to_string(),
            property_type: derive_property_type(record.title_main.as_deref()),
            bedrooms: record.bedroom_count,
            bathrooms: record.bathroom_count,
            status: derive_status(record.status_badge_text.as_deref()),
            image_url: record.image_url.clone(),
            phone_number: record.agent_phone.clone().filter(|p| !p.is_empty()),
        }
    }
}

fn build_title(main: Option<&str>, type_label: Option<&str>) -> String {
    let main = main.unwrap_or("").trim();
    match type_label.filter(|t| !t.is_empty()) {
        Some(label) => format!("{main} {label}").trim().to_string(),
        None => main.to_string(),
    }
}
