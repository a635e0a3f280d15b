// src/domain/logic.rs

use super::listing::{ListingStatus, PropertyType};

/// Placeholder slug component for listings without an MLS code.
pub const NO_MLS: &str = "no-mls";

/// A single text rule: if the lowercased input contains `needle`, the rule
/// proposes `outcome`.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    pub needle: &'static str,
    pub outcome: T,
}

/// How to settle an input that matches more than one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// The earliest matching rule in the list wins.
    FirstMatch,
    /// Every matching rule overwrites the previous outcome; the last one wins.
    LastMatch,
}

/// Property type is chosen from `title_main`, highest priority first.
pub const PROPERTY_TYPE_RULES: &[Rule<PropertyType>] = &[
    Rule { needle: "commercial", outcome: PropertyType::Commercial },
    Rule { needle: "apartment", outcome: PropertyType::Apartment },
    Rule { needle: "house", outcome: PropertyType::House },
];

/// Status is chosen from the badge text. A badge mentioning both phrases ends
/// up `UnderOffer` because later rules overwrite earlier ones.
pub const STATUS_RULES: &[Rule<ListingStatus>] = &[
    Rule { needle: "under contract", outcome: ListingStatus::UnderContract },
    Rule { needle: "under offer", outcome: ListingStatus::UnderOffer },
];

/// Evaluates `rules` against `text` (case-insensitive) in list order.
pub fn classify<T: Copy>(text: &str, rules: &[Rule<T>], tie_break: TieBreak, default: T) -> T {
    let lowered = text.to_lowercase();
    let mut matches = rules.iter().filter(|r| lowered.contains(r.needle));

    let picked = match tie_break {
        TieBreak::FirstMatch => matches.next(),
        TieBreak::LastMatch => matches.last(),
    };

    picked.map(|r| r.outcome).unwrap_or(default)
}

pub fn derive_property_type(title_main: Option<&str>) -> PropertyType {
    classify(
        title_main.unwrap_or(""),
        PROPERTY_TYPE_RULES,
        TieBreak::FirstMatch,
        PropertyType::Rent,
    )
}

pub fn derive_status(badge: Option<&str>) -> ListingStatus {
    classify(
        badge.unwrap_or(""),
        STATUS_RULES,
        TieBreak::LastMatch,
        ListingStatus::Available,
    )
}

/// Splits "Parish, Town" on the first comma.
///
/// Without a comma the whole text is the town. Empty parts come back as `None`.
pub fn split_location(text: &str) -> (Option<String>, Option<String>) {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    match text.split_once(',') {
        Some((parish, town)) => (non_empty(parish), non_empty(town)),
        None => (None, non_empty(text)),
    }
}

/// Lowercases and collapses every run of non `[a-z0-9]` characters into one `-`.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_sep = false;

    for ch in s.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }

    out
}
