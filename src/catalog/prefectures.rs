use crate::models::Prefecture;

/// Prefecture ids as they appear in the site's URL paths.
pub const PREFECTURES: &[Prefecture] = &[
    Prefecture { id: "aichi" },
    Prefecture { id: "akita" },
    Prefecture { id: "aomori" },
    Prefecture { id: "chiba" },
    Prefecture { id: "ehime" },
    Prefecture { id: "fukui" },
    Prefecture { id: "fukuoka" },
    Prefecture { id: "fukushima" },
    Prefecture { id: "gifu" },
    Prefecture { id: "gumma" },
    Prefecture { id: "hiroshima" },
    Prefecture { id: "hokkaido" },
    Prefecture { id: "hyogo" },
    Prefecture { id: "ibaraki" },
    Prefecture { id: "ishikawa" },
    Prefecture { id: "iwate" },
    Prefecture { id: "kagawa" },
    Prefecture { id: "kagoshima" },
    Prefecture { id: "kanagawa" },
    Prefecture { id: "kochi" },
    Prefecture { id: "kumamoto" },
    Prefecture { id: "kyoto" },
    Prefecture { id: "mie" },
    Prefecture { id: "miyagi" },
    Prefecture { id: "miyazaki" },
    Prefecture { id: "nagano" },
    Prefecture { id: "nagasaki" },
    Prefecture { id: "nara" },
    Prefecture { id: "niigata" },
    Prefecture { id: "oita" },
    Prefecture { id: "okayama" },
    Prefecture { id: "okinawa" },
    Prefecture { id: "osaka" },
    Prefecture { id: "saga" },
    Prefecture { id: "saitama" },
    Prefecture { id: "shiga" },
    Prefecture { id: "shimane" },
    Prefecture { id: "shizuoka" },
    Prefecture { id: "tochigi" },
    Prefecture { id: "tokushima" },
    Prefecture { id: "tokyo" },
    Prefecture { id: "tottori" },
    Prefecture { id: "toyama" },
    Prefecture { id: "wakayama" },
    Prefecture { id: "yamagata" },
    Prefecture { id: "yamaguchi" },
    Prefecture { id: "yamanashi" },
];
