use serde::{Deserialize, Serialize};

/// Search parameters for the listing search form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Prefecture id used in the URL path
    pub prefecture: String,
    /// Postal area codes sent as `jyuusyo_cd_list[]`
    pub postal_codes: Vec<String>,
}

impl Default for SearchParams {
    /// Shibuya Ward, Tokyo
    fn default() -> Self {
        Self {
            prefecture: "tokyo".to_string(),
            postal_codes: vec!["13113".to_string()],
        }
    }
}
