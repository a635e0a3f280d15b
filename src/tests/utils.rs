use crate::scraper::listings::LISTING_MARKER;

/// Field values for one fake listing card. `None` leaves that element out.
pub struct BlockSpec {
    pub url: Option<String>,
    pub img: Option<String>,
    pub agent: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub type_label: Option<String>,
    pub price: Option<String>,
    pub mls: Option<String>,
    pub desc: Option<String>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub area: Option<String>,
    pub badge: Option<String>,
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self {
            url: Some("https://example.com/property/42".into()),
            img: Some("https://example.com/img/42.jpg".into()),
            agent: Some("Jane Brown".into()),
            phone: Some("876-555-0101".into()),
            location: Some("St. Andrew, Kingston".into()),
            title: Some("Family House".into()),
            type_label: Some("For Sale".into()),
            price: Some("12,500,000".into()),
            mls: Some("MLS-4242".into()),
            desc: Some("Three bedroom family home.".into()),
            beds: Some(3),
            baths: Some(2),
            area: Some("1,850".into()),
            badge: Some("Under Offer".into()),
        }
    }
}

/// Renders a card the way the search results template does, marker included.
pub fn listing_block(spec: &BlockSpec) -> String {
    let mut out = String::new();
    let mut push = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    push(LISTING_MARKER.to_string());
    push(r#"<div class="property_card">"#.to_string());
    if let Some(url) = &spec.url {
        push(format!(r#"<a href="{url}">"#));
    }
    if let Some(img) = &spec.img {
        push(format!(r#"<img class="prop_img" src="{img}" alt="listing">"#));
    }
    if spec.url.is_some() {
        push("</a>".to_string());
    }
    if let Some(agent) = &spec.agent {
        push(format!(r#"<h3 class="agnt_name"> {agent} </h3>"#));
    }
    if let Some(phone) = &spec.phone {
        push(format!(r#"<h4 class="agnt_mob">{phone}</h4>"#));
    }
    if let Some(badge) = &spec.badge {
        push(format!(r#"<span class="contract_badge">{badge}</span>"#));
    }
    if let Some(location) = &spec.location {
        push(format!(r#"<p class="location"><span class="txts">{location}</span></p>"#));
    }
    match (&spec.title, &spec.type_label) {
        (Some(title), Some(label)) => push(format!(
            r#"<h3 class="title">{title} <span class="typespan">{label}</span></h3>"#
        )),
        (Some(title), None) => push(format!(r#"<h3 class="title">{title}</h3>"#)),
        (None, Some(label)) => push(format!(r#"<span class="typespan">{label}</span>"#)),
        (None, None) => {}
    }
    if let Some(price) = &spec.price {
        push(format!(r#"<div class="price">JMD ${price}</div>"#));
    }
    if let Some(mls) = &spec.mls {
        push(format!(r#"<p class="mls">{mls}</p>"#));
    }
    if let Some(desc) = &spec.desc {
        push(format!(r#"<p class="propdesc">{desc}</p>"#));
    }
    push("<ul>".to_string());
    if let Some(beds) = spec.beds {
        push(format!(r#"<li class="beds_li"><span class="counts">{beds}</span> Beds</li>"#));
    }
    if let Some(baths) = spec.baths {
        push(format!(r#"<li class="baths_li"><span class="counts">{baths}</span> Baths</li>"#));
    }
    if let Some(area) = &spec.area {
        push(format!(r#"<li class="size_li"><span class="counts">{area} SqFt</span></li>"#));
    }
    push("</ul>".to_string());
    push("</div>".to_string());
    push("</div>".to_string());

    out
}

const TITLES: [&str; 4] = ["Family House", "2 Bed Apartment", "Commercial Warehouse", "Studio Unit"];
const BADGES: [&str; 3] = ["", "Under Contract", "Under Offer"];

/// A results page with `n` varied listing cards, MLS codes `MLS-1000`, `MLS-1001`, ...
pub fn sample_document(n: usize) -> String {
    let mut doc = String::from(
        "<!DOCTYPE html>\n<html><head><title>Search results</title></head>\n<body>\n<div class=\"row\">\n",
    );

    for i in 0..n {
        let spec = BlockSpec {
            url: Some(format!("https://example.com/property/{i}")),
            img: Some(format!("https://example.com/img/{i}.jpg")),
            title: Some(TITLES[i % TITLES.len()].to_string()),
            type_label: (i % 2 == 0).then(|| "For Sale".to_string()),
            price: Some(format!("{},000,000", i + 1)),
            mls: Some(format!("MLS-{}", 1000 + i)),
            beds: (i % 3 != 0).then_some(i as u32),
            badge: Some(BADGES[i % BADGES.len()].to_string()),
            ..Default::default()
        };
        doc.push_str(&listing_block(&spec));
    }

    doc.push_str("</div>\n</body>\n</html>\n");
    doc
}
