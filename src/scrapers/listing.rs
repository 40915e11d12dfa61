//! Extracts property cards from the search result page

use crate::models::{Amenity, Company, PricingPeriod, PropertyListing};
use crate::scrapers::request::BASE_URL;
use anyhow::Result;
use chrono::Utc;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

/// CSS selectors for the parts of a listing card
struct ListingSelectors {
    container: Selector,
    title_link: Selector,
    image: Selector,
    detail_row: Selector,
    row_label: Selector,
    row_value: Selector,
    tooltip: Selector,
    amenity: Selector,
    price_row: Selector,
    price_header: Selector,
    price_range: Selector,
    price_cell: Selector,
    company_link: Selector,
    company_phone: Selector,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Failed to parse selector {css:?}: {e:?}"))
}

impl ListingSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            container: selector(".listArea .box.linkBoxMultiple")?,
            title_link: selector(".titleArea h4 a")?,
            image: selector(".detailPhotoArea .slide ul li img")?,
            detail_row: selector(".detailInner dl")?,
            row_label: selector("dt")?,
            row_value: selector("dd")?,
            tooltip: selector(".toolTip01")?,
            amenity: selector(".iconArea ul li")?,
            price_row: selector(".price table tr.style02")?,
            price_header: selector("th")?,
            price_range: selector("span")?,
            price_cell: selector("td")?,
            company_link: selector(".company dl.layout01 dd a")?,
            company_phone: selector(".company dl.layout02 dd")?,
        })
    }
}

/// Classes whose subtrees are dropped from a `dd` value
const TOOLTIP_CLASSES: &[&str] = &["toolTipLink", "toolTip01"];

/// Labelled fields of the `.detailInner` block
#[derive(Debug, Default)]
struct DetailFields {
    address: Option<String>,
    nearest_station: Option<String>,
    additional_transport: Option<String>,
    layout: Option<String>,
    area: Option<String>,
    built_date: Option<String>,
}

/// Parses listing result pages into [`PropertyListing`] records
pub struct ListingExtractor {
    selectors: ListingSelectors,
    bukken_no: Regex,
    whitespace: Regex,
}

impl ListingExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: ListingSelectors::new()?,
            bukken_no: Regex::new(r"bukken_no=(\d+)")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Extract every listing card in document order.
    ///
    /// Missing optional fields become `None`; a page without containers yields
    /// an empty vector.
    pub fn extract(&self, html: &str) -> Vec<PropertyListing> {
        let document = Html::parse_document(html);

        document
            .select(&self.selectors.container)
            .map(|card| self.extract_card(card))
            .collect()
    }

    fn extract_card(&self, card: ElementRef) -> PropertyListing {
        let s = &self.selectors;

        let title_link = card.select(&s.title_link).next();
        let title = title_link
            .map(|link| link.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let detail_href = title_link
            .and_then(|link| link.value().attr("href"))
            .unwrap_or("");
        let id = self
            .bukken_no
            .captures(detail_href)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        debug!("Processing listing {}: {}", id, title);

        let images = card
            .select(&s.image)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())
            .map(absolute_url)
            .collect();

        let details = self.extract_details(card);

        let amenities = card
            .select(&s.amenity)
            .filter_map(|li| {
                let name = li.text().collect::<String>().trim().to_string();
                if name.is_empty() {
                    return None;
                }
                let available = li.value().classes().any(|class| class == "on");
                Some(Amenity { name, available })
            })
            .collect();

        let pricing = card
            .select(&s.price_row)
            .map(|row| self.extract_pricing_row(row))
            .collect();

        let company_link = card.select(&s.company_link).next();
        let company = Company {
            name: non_empty(joined_text(card, &s.company_link)),
            url: company_link
                .and_then(|link| link.value().attr("href"))
                .filter(|href| !href.is_empty())
                .map(absolute_url),
            phone: non_empty(joined_text(card, &s.company_phone)),
        };

        PropertyListing {
            id,
            title,
            detail_url: absolute_url(detail_href),
            images,
            address: details.address,
            nearest_station: details.nearest_station,
            additional_transport: details.additional_transport,
            layout: details.layout,
            area: details.area,
            built_date: details.built_date,
            amenities,
            pricing,
            company,
            scraped_at: Utc::now(),
        }
    }

    fn extract_details(&self, card: ElementRef) -> DetailFields {
        let s = &self.selectors;
        let mut fields = DetailFields::default();

        for row in card.select(&s.detail_row) {
            let label = joined_text(row, &s.row_label);
            let value = {
                let mut raw = String::new();
                for dd in row.select(&s.row_value) {
                    text_excluding(dd, TOOLTIP_CLASSES, &mut raw);
                }
                self.collapse(&raw)
            };
            let tooltip = self.collapse(&joined_text(row, &s.tooltip));

            match label.trim() {
                "所在地" => fields.address = Some(value),
                "最寄駅" => {
                    fields.nearest_station = Some(value);
                    if !tooltip.is_empty() {
                        fields.additional_transport = Some(tooltip);
                    }
                }
                "間取り" => fields.layout = Some(value),
                "面積" => fields.area = Some(value),
                "築年月" => fields.built_date = Some(value),
                _ => {}
            }
        }

        fields
    }

    fn extract_pricing_row(&self, row: ElementRef) -> PricingPeriod {
        let s = &self.selectors;

        let header = row.select(&s.price_header).next();
        let period_name = header.map(own_text).unwrap_or_default().trim().to_string();
        let period_range = header
            .map(|th| joined_text(th, &s.price_range))
            .unwrap_or_default()
            .trim()
            .to_string();

        let cells: Vec<ElementRef> = row.select(&s.price_cell).collect();
        let rent = cells.first().map(|td| cell_lines(*td)).unwrap_or_default();
        let utilities = cells.get(1).map(|td| cell_lines(*td)).unwrap_or_default();
        let cleaning_fee = cells
            .get(2)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .and_then(non_empty);

        PricingPeriod {
            period_name,
            period_range,
            rent_per_day: rent.first().cloned(),
            rent_per_month: rent.get(1).cloned(),
            utilities_per_day: utilities.first().cloned(),
            utilities_per_month: utilities.get(1).cloned(),
            cleaning_fee,
        }
    }

    fn collapse(&self, text: &str) -> String {
        self.whitespace.replace_all(text.trim(), " ").into_owned()
    }
}

/// Prefix site-relative paths with the base URL; absolute URLs pass through
pub fn absolute_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", BASE_URL, href)
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Trimmed text of every match, concatenated
fn joined_text(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Text of the element's direct text nodes, ignoring child elements
fn own_text(element: ElementRef) -> String {
    element
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

fn text_excluding(element: ElementRef, classes: &[&str], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.classes().any(|class| classes.contains(&class)) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    text_excluding(child, classes, out);
                }
            }
            _ => {}
        }
    }
}

/// Split a table cell on `<br>` into trimmed, non-empty lines
fn cell_lines(cell: ElementRef) -> Vec<String> {
    let mut text = String::new();
    for node in cell.descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(el) if el.name() == "br" => text.push('\n'),
            _ => {}
        }
    }

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/list_add.html");

    fn extract(html: &str) -> Vec<PropertyListing> {
        ListingExtractor::new().unwrap().extract(html)
    }

    fn card(inner: &str) -> String {
        format!(
            r#"<html><body><div class="listArea"><div class="box linkBoxMultiple">{inner}</div></div></body></html>"#
        )
    }

    #[test]
    fn emits_one_record_per_container_in_order() {
        let listings = extract(FIXTURE);
        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["12345", "67890", "24680"]);
    }

    #[test]
    fn extracts_full_card() {
        let listings = extract(FIXTURE);
        let listing = &listings[0];

        assert_eq!(listing.title, "ウィークリー渋谷 101号室");
        assert_eq!(
            listing.detail_url,
            "https://www.weekly-mansion.com/tokyo/detail.html?bukken_no=12345&room=101"
        );
        assert_eq!(listing.address.as_deref(), Some("東京都渋谷区渋谷1-2-3"));
        assert_eq!(
            listing.nearest_station.as_deref(),
            Some("JR山手線 渋谷駅 徒歩5分")
        );
        assert_eq!(
            listing.additional_transport.as_deref(),
            Some("東京メトロ銀座線 表参道駅 徒歩10分 京王井の頭線 神泉駅 徒歩8分")
        );
        assert_eq!(listing.layout.as_deref(), Some("1K"));
        assert_eq!(listing.area.as_deref(), Some("20.5㎡"));
        assert_eq!(listing.built_date.as_deref(), Some("2015年3月"));
    }

    #[test]
    fn amenities_follow_on_class() {
        let listings = extract(FIXTURE);
        let amenities = &listings[0].amenities;

        assert_eq!(
            amenities,
            &vec![
                Amenity { name: "エアコン".to_string(), available: true },
                Amenity { name: "テレビ".to_string(), available: false },
                Amenity { name: "インターネット".to_string(), available: true },
            ]
        );
    }

    #[test]
    fn pricing_rows_split_on_line_breaks() {
        let listings = extract(FIXTURE);
        let pricing = &listings[0].pricing;
        assert_eq!(pricing.len(), 2);

        let short = &pricing[0];
        assert_eq!(short.period_name, "ショート");
        assert_eq!(short.period_range, "(7日～29日)");
        assert_eq!(short.rent_per_day.as_deref(), Some("3,500円/日"));
        assert_eq!(short.rent_per_month.as_deref(), Some("105,000円/月"));
        assert_eq!(short.utilities_per_day.as_deref(), Some("1,000円/日"));
        assert_eq!(short.utilities_per_month.as_deref(), Some("30,000円/月"));
        assert_eq!(short.cleaning_fee.as_deref(), Some("22,000円"));

        let monthly = &pricing[1];
        assert_eq!(monthly.period_name, "マンスリー");
        assert_eq!(monthly.rent_per_day.as_deref(), Some("3,000円/日"));
        assert_eq!(monthly.rent_per_month.as_deref(), Some("90,000円/月"));
    }

    #[test]
    fn single_line_rent_has_no_monthly_value() {
        let listings = extract(FIXTURE);
        let pricing = &listings[1].pricing[0];

        assert_eq!(pricing.rent_per_day.as_deref(), Some("4,200円/日"));
        assert_eq!(pricing.rent_per_month, None);
        assert_eq!(pricing.utilities_per_day, None);
        assert_eq!(pricing.utilities_per_month, None);
        assert_eq!(pricing.cleaning_fee, None);
    }

    #[test]
    fn missing_address_is_none() {
        let listings = extract(FIXTURE);
        let listing = &listings[1];

        assert_eq!(listing.address, None);
        assert_eq!(listing.layout.as_deref(), Some("1R"));
        assert_eq!(listing.additional_transport, None);
    }

    #[test]
    fn bare_card_defaults_to_empty_values() {
        let listings = extract(FIXTURE);
        let listing = &listings[2];

        assert_eq!(listing.title, "新宿ステイ");
        assert!(listing.images.is_empty());
        assert!(listing.amenities.is_empty());
        assert!(listing.pricing.is_empty());
        assert_eq!(listing.nearest_station, None);
        assert_eq!(listing.built_date, None);
        assert_eq!(listing.company, Company::default());
    }

    #[test]
    fn urls_are_made_absolute() {
        let listings = extract(FIXTURE);

        assert_eq!(
            listings[0].images,
            vec![
                "https://www.weekly-mansion.com/img/bukken/12345_1.jpg".to_string(),
                "https://cdn.example.com/bukken/12345_2.jpg".to_string(),
            ]
        );
        assert_eq!(
            listings[1].detail_url,
            "https://www.weekly-mansion.com/tokyo/detail.html?bukken_no=67890"
        );
        assert_eq!(
            listings[0].company.url.as_deref(),
            Some("https://www.weekly-mansion.com/company/detail.html?company_no=77")
        );
        assert_eq!(
            listings[1].company.url.as_deref(),
            Some("https://broker.example.jp/")
        );
    }

    #[test]
    fn extracts_company_contact() {
        let listings = extract(FIXTURE);
        let company = &listings[0].company;

        assert_eq!(company.name.as_deref(), Some("株式会社ウィークリー不動産"));
        assert_eq!(company.phone.as_deref(), Some("03-1234-5678"));
        assert_eq!(listings[1].company.phone, None);
    }

    #[test]
    fn page_without_containers_yields_nothing() {
        assert!(extract("<html><body><p>該当する物件がありません</p></body></html>").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn boxes_outside_list_area_are_ignored() {
        let html = r#"<div class="box linkBoxMultiple"><div class="titleArea"><h4><a href="?bukken_no=1">x</a></h4></div></div>"#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn detail_link_without_bukken_no_gives_empty_id() {
        let html = card(r#"<div class="titleArea"><h4><a href="/tokyo/detail.html">部屋</a></h4></div>"#);
        let listings = extract(&html);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "");
        assert_eq!(listings[0].detail_url, "https://www.weekly-mansion.com/tokyo/detail.html");
    }

    #[test]
    fn unknown_labels_are_skipped() {
        let html = card(
            r#"<div class="detailInner"><dl><dt>構造</dt><dd>RC</dd></dl><dl><dt> 面積 </dt><dd>
                18.0㎡
            </dd></dl></div>"#,
        );
        let listing = &extract(&html)[0];
        assert_eq!(listing.area.as_deref(), Some("18.0㎡"));
        assert_eq!(listing.address, None);
    }

    #[test]
    fn absolute_url_passthrough() {
        assert_eq!(absolute_url("https://a.example/x"), "https://a.example/x");
        assert_eq!(absolute_url("http://a.example/x"), "http://a.example/x");
        assert_eq!(absolute_url("/x.jpg"), "https://www.weekly-mansion.com/x.jpg");
    }
}
