//! Builds the POST request behind the site's "search list" form

use rand::Rng;
use reqwest::Method;

pub const BASE_URL: &str = "https://www.weekly-mansion.com";

/// Form field carrying the postal area codes; repeated once per code
pub const POSTAL_CODE_FIELD: &str = "jyuusyo_cd_list[]";

/// Filter fields sent with every search, in form order.
///
/// The display counts ask for the whole result set on a single page.
const DEFAULT_FIELDS_HEAD: &[(&str, &str)] = &[
    ("disp_count_upper", "10000"),
    ("sort", ""),
    ("disp_count_under", "10"),
    ("this_page_no", "1"),
    ("cmd", "COUNT"),
    ("disp_count", "10000"),
    ("hidden_sort", ""),
];

/// Everything after `random_number`: rent, stay, occupancy, walk, size, age,
/// bed, layout, condition, equipment and guarantor filters, all left open.
const DEFAULT_FIELDS_TAIL: &[(&str, &str)] = &[
    // rent
    ("web_yachin_int_ss_to", ""),
    ("web_yachin_int_s_month_to", ""),
    ("hidden_web_yachin_int_ss_from", "1"),
    ("hidden_web_yachin_int_ss_to", ""),
    ("hidden_web_yachin_int_s_month_from", "1"),
    ("hidden_web_yachin_int_s_month_to", ""),
    // stay period
    ("priod_time_to_short", ""),
    ("hidden_priod_time_to_short", ""),
    // occupancy
    ("web_nyukyo_ninzu", ""),
    ("hidden_web_nyukyo_ninzu", ""),
    ("walk", ""),
    ("hidden_walk", ""),
    // room size
    ("good_web_hirosa_from", ""),
    ("good_web_hirosa_to", ""),
    ("hidden_good_web_hirosa_from", ""),
    ("hidden_good_web_hirosa_to", ""),
    ("chiku_ym", ""),
    ("hidden_chiku_ym", ""),
    ("hidden_new_web_bed_type1", ""),
    ("hidden_new_web_bed_type2", ""),
    ("hidden_new_web_bed_type3", ""),
    ("hidden_new_web_bed_type4", ""),
    // madori
    ("hidden_good_web_madori_1R", ""),
    ("hidden_good_web_madori_1K", ""),
    ("hidden_good_web_madori_1DK", ""),
    ("hidden_good_web_madori_1LDK", ""),
    ("hidden_good_web_madori_2K", ""),
    ("hidden_good_web_madori_2DK", ""),
    ("hidden_good_web_madori_2LDK", ""),
    ("hidden_jyouken1", ""),
    ("hidden_jyouken4", ""),
    ("hidden_jyouken6", ""),
    ("hidden_jyouken10", ""),
    ("hidden_jyouken12", ""),
    ("hidden_jyouken16", ""),
    ("hidden_jyouken17", ""),
    // equipment
    ("hidden_setsubi_autoLock", ""),
    ("hidden_setsubi_air_conditioner", ""),
    ("hidden_setsubi_tv", ""),
    ("hidden_setsubi_microwave_oven", ""),
    ("hidden_setsubi_icebox", ""),
    ("hidden_setsubi_closet", ""),
    ("hidden_setsubi_bath_toilet_separate", ""),
    ("hidden_setsubi_washroom_separate", ""),
    ("hidden_setsubi_flooring", ""),
    ("hidden_setsubi_washing_machine", ""),
    ("hidden_setsubi_vacuum_cleaner", ""),
    ("hidden_setsubi_delivery_to_home_box", ""),
    ("hidden_setsubi_ih_cooking_heater", ""),
    ("hidden_setsubi_gas_conlo", ""),
    ("hidden_setsubi_addition_heat", ""),
    ("hidden_setsubi_bathroom_dryer", ""),
    ("hidden_setsubi_wash_toilet", ""),
    ("hidden_setsubi_elevator", ""),
    // guarantor / payment
    ("hidden_hoshounin_flag", ""),
    ("hidden_web_pay3", ""),
];

/// A fully assembled search request, built fresh for every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(&'static str, &'static str)>,
    /// Fixed filter fields plus the pagination nonce, in form order
    pub fields: Vec<(&'static str, String)>,
    /// Postal area codes, in input order
    pub postal_codes: Vec<String>,
}

impl SearchRequest {
    /// Flatten the payload into form pairs, repeating the postal code field per code
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .chain(
                self.postal_codes
                    .iter()
                    .map(|code| (POSTAL_CODE_FIELD.to_string(), code.clone())),
            )
            .collect()
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Build the listing search request with a random pagination nonce
pub fn apartments_list_search_request(prefecture: &str, postal_codes: &[String]) -> SearchRequest {
    let nonce = rand::thread_rng().gen_range(0..1000);
    apartments_list_search_request_with_nonce(prefecture, postal_codes, nonce)
}

pub fn apartments_list_search_request_with_nonce(
    prefecture: &str,
    postal_codes: &[String],
    nonce: u32,
) -> SearchRequest {
    let fields = DEFAULT_FIELDS_HEAD
        .iter()
        .map(|(key, value)| (*key, value.to_string()))
        .chain(std::iter::once(("random_number", nonce.to_string())))
        .chain(
            DEFAULT_FIELDS_TAIL
                .iter()
                .map(|(key, value)| (*key, value.to_string())),
        )
        .collect();

    SearchRequest {
        url: format!("{}/{}/search/list_add.html", BASE_URL, prefecture),
        method: Method::POST,
        headers: vec![("Content-Type", "application/x-www-form-urlencoded")],
        fields,
        postal_codes: postal_codes.to_vec(),
    }
}
