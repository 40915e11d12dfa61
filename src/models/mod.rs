use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A prefecture as spelled in the site's URL paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefecture {
    pub id: &'static str,
}

/// Japanese and English name of a postal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedName {
    pub jp: &'static str,
    pub en: &'static str,
}

/// Municipality-level area code accepted by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalArea {
    pub code: &'static str,
    pub name: LocalizedName,
    pub prefecture: &'static str,
}

/// Equipment flag shown as an icon on a listing card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub available: bool,
}

/// One stay-duration tier of the pricing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPeriod {
    pub period_name: String,
    pub period_range: String,
    pub rent_per_day: Option<String>,
    pub rent_per_month: Option<String>,
    pub utilities_per_day: Option<String>,
    pub utilities_per_month: Option<String>,
    pub cleaning_fee: Option<String>,
}

/// Broker that advertises the listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: Option<String>,
    pub url: Option<String>,
    pub phone: Option<String>,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub detail_url: String,
    pub images: Vec<String>,
    pub address: Option<String>,
    pub nearest_station: Option<String>,
    pub additional_transport: Option<String>,
    pub layout: Option<String>,
    pub area: Option<String>,
    pub built_date: Option<String>,
    pub amenities: Vec<Amenity>,
    pub pricing: Vec<PricingPeriod>,
    pub company: Company,
    pub scraped_at: DateTime<Utc>,
}
