//! Static reference data: prefectures and the postal areas the search form accepts

mod postal_codes;
mod prefectures;

use crate::models::{PostalArea, Prefecture};

pub use postal_codes::{POSTAL_CODES_SAITAMA, POSTAL_CODES_TOKYO};
pub use prefectures::PREFECTURES;

/// Every known postal area, Tokyo first
pub fn postal_areas() -> impl Iterator<Item = &'static PostalArea> {
    POSTAL_CODES_TOKYO.iter().chain(POSTAL_CODES_SAITAMA.iter())
}

pub fn find_prefecture(id: &str) -> Option<&'static Prefecture> {
    PREFECTURES.iter().find(|prefecture| prefecture.id == id)
}

pub fn find_postal_area_by_code(code: &str) -> Option<&'static PostalArea> {
    postal_areas().find(|area| area.code == code)
}

/// Match either the English or the Japanese name exactly
pub fn find_postal_area_by_name(name: &str) -> Option<&'static PostalArea> {
    postal_areas().find(|area| area.name.en == name || area.name.jp == name)
}

pub fn postal_areas_in(prefecture: &str) -> impl Iterator<Item = &'static PostalArea> + '_ {
    postal_areas().filter(move |area| area.prefecture == prefecture)
}
