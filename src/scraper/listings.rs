// listings.rs
use std::borrow::Cow;
use std::str::FromStr;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::SegmenterKind;
use crate::domain::ListingRecord;
use crate::scraper::ScraperError;

/// Opening tag that precedes every listing card on the search results page.
pub const LISTING_MARKER: &str = r#"<div class="col-lg-4 col-md-6 col-12 property_list_colm">"#;

/// CSS equivalent of `LISTING_MARKER`, used by the DOM segmenter.
pub const LISTING_SELECTOR: &str = "div.property_list_colm";

/// The markup of one listing card. Only lives until its fields are extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListingBlock<'a>(Cow<'a, str>);

impl<'a> RawListingBlock<'a> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Turns a whole page into listing blocks, in document order.
pub trait BlockSegmenter {
    fn segment<'a>(&self, document: &'a str) -> Result<Vec<RawListingBlock<'a>>, ScraperError>;
}

/// Splits on `LISTING_MARKER`. Content before the first marker is dropped and
/// each block runs until the next marker or the end of the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerSegmenter;

impl BlockSegmenter for MarkerSegmenter {
    fn segment<'a>(&self, document: &'a str) -> Result<Vec<RawListingBlock<'a>>, ScraperError> {
        Ok(document
            .split(LISTING_MARKER)
            .skip(1)
            .map(|part| RawListingBlock(Cow::Borrowed(part)))
            .collect())
    }
}

/// Parses the page and serializes every `LISTING_SELECTOR` element back to HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomSegmenter;

impl BlockSegmenter for DomSegmenter {
    fn segment<'a>(&self, document: &'a str) -> Result<Vec<RawListingBlock<'a>>, ScraperError> {
        let html = Html::parse_document(document);
        let selector =
            Selector::parse(LISTING_SELECTOR).map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        Ok(html
            .select(&selector)
            .map(|el| RawListingBlock(Cow::Owned(el.html())))
            .collect())
    }
}

pub fn segmenter_for(kind: SegmenterKind) -> Box<dyn BlockSegmenter> {
    match kind {
        SegmenterKind::Marker => Box::new(MarkerSegmenter),
        SegmenterKind::Dom => Box::new(DomSegmenter),
    }
}

/// Compiled field patterns. Each field is searched independently inside a
/// block; a pattern that does not match leaves the field `None`.
pub struct ListingExtractor {
    href: Regex,
    img: Regex,
    agent: Regex,
    phone: Regex,
    location: Regex,
    title_main: Regex,
    type_label: Regex,
    price: Regex,
    mls: Regex,
    description: Regex,
    beds: Regex,
    baths: Regex,
    area: Regex,
    status_badge: Regex,
}

fn tagged_text(tag: &str, class: &str) -> String {
    format!(r#"<{tag} class="{class}">\s*([^<]+?)\s*<"#)
}

fn counted(item_class: &str, value: &str) -> String {
    format!(r#"class="{item_class}"[\s\S]*?<span class="counts">\s*{value}"#)
}

impl ListingExtractor {
    /// `currency` is the code printed in front of prices, e.g. `JMD $12,500,000`.
    pub fn new(currency: &str) -> Result<Self, ScraperError> {
        let re = |pattern: &str| {
            Regex::new(pattern).map_err(|e| ScraperError::Config(format!("bad pattern: {e}")))
        };

        Ok(Self {
            href: re(r#"href="([^"]+)""#)?,
            img: re(r#"<img[^>]+src="([^"]+)""#)?,
            agent: re(&tagged_text("h3", "agnt_name"))?,
            phone: re(&tagged_text("h4", "agnt_mob"))?,
            location: re(&tagged_text("span", "txts"))?,
            title_main: re(&tagged_text("h3", "title"))?,
            type_label: re(&tagged_text("span", "typespan"))?,
            price: re(&format!(r"{}\s*\$?([\d,]+)", regex::escape(currency)))?,
            mls: re(r"(MLS-\d+)")?,
            description: re(&tagged_text("p", "propdesc"))?,
            beds: re(&counted("beds_li", r"(\d+)"))?,
            baths: re(&counted("baths_li", r"(\d+)"))?,
            area: re(&counted("size_li", r"([\d,]+)\s*SqFt"))?,
            status_badge: re(r#"<span class="contract_badge">\s*([^<]*?)\s*<"#)?,
        })
    }

    pub fn extract(&self, block: &RawListingBlock<'_>) -> ListingRecord {
        let text = block.as_str();
        let grab = |re: &Regex| capture(re, text);

        ListingRecord {
            detail_url: grab(&self.href),
            image_url: grab(&self.img),
            agent_name: grab(&self.agent),
            agent_phone: grab(&self.phone),
            location_text: grab(&self.location),
            title_main: grab(&self.title_main),
            type_label: grab(&self.type_label),
            price_text: grab(&self.price).and_then(|p| digits_only(&p)),
            mls_code: grab(&self.mls),
            description_text: grab(&self.description),
            bedroom_count: grab(&self.beds).and_then(|v| parse_number(&v)),
            bathroom_count: grab(&self.baths).and_then(|v| parse_number(&v)),
            area_square_feet: grab(&self.area).and_then(|v| parse_number(&v)),
            status_badge_text: grab(&self.status_badge),
        }
    }

    /// One record per block, same order as the blocks.
    pub fn extract_all(&self, blocks: &[RawListingBlock<'_>]) -> Vec<ListingRecord> {
        blocks.iter().map(|b| self.extract(b)).collect()
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != ',').collect()
}

/// `"12,500,000"` -> `Some("12500000")`. Anything left that is not a digit,
/// or nothing left at all, means the price is unknown.
fn digits_only(raw: &str) -> Option<String> {
    let digits = strip_separators(raw);
    (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())).then_some(digits)
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    strip_separators(raw).parse().ok()
}
