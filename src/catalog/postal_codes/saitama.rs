use crate::models::{LocalizedName, PostalArea};

pub const POSTAL_CODES_SAITAMA: &[PostalArea] = &[
    PostalArea {
        code: "11219",
        name: LocalizedName { jp: "上尾市", en: "Ageo City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11227",
        name: LocalizedName { jp: "朝霞市", en: "Asaka City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11326",
        name: LocalizedName { jp: "入間郡毛呂山町", en: "Moroyama Town, Iruma District" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11225",
        name: LocalizedName { jp: "入間市", en: "Iruma City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11214",
        name: LocalizedName { jp: "春日部市", en: "Kasukabe City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11203",
        name: LocalizedName { jp: "川口市", en: "Kawaguchi City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11201",
        name: LocalizedName { jp: "川越市", en: "Kawagoe City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11464",
        name: LocalizedName { jp: "北葛飾郡杉戸町", en: "Sugito Town, Kita-Katsushushika District" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11206",
        name: LocalizedName { jp: "行田市", en: "Gyoda City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11232",
        name: LocalizedName { jp: "久喜市", en: "Kuki City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11202",
        name: LocalizedName { jp: "熊谷市", en: "Kumagaya City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11222",
        name: LocalizedName { jp: "越谷市", en: "Koshigaya City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11240",
        name: LocalizedName { jp: "幸手市", en: "Satte City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11110",
        name: LocalizedName { jp: "さいたま市岩槻区", en: "Iwatsuki Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11107",
        name: LocalizedName { jp: "さいたま市浦和区", en: "Urawa Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11103",
        name: LocalizedName { jp: "さいたま市大宮区", en: "Omiya Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11102",
        name: LocalizedName { jp: "さいたま市北区", en: "Kita Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11106",
        name: LocalizedName { jp: "さいたま市桜区", en: "Sakura Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11105",
        name: LocalizedName { jp: "さいたま市中央区", en: "Chuo Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11101",
        name: LocalizedName { jp: "さいたま市西区", en: "Nishi Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11109",
        name: LocalizedName { jp: "さいたま市緑区", en: "Midori Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11108",
        name: LocalizedName { jp: "さいたま市南区", en: "Minami Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11104",
        name: LocalizedName { jp: "さいたま市見沼区", en: "Minuma Ward, Saitama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11239",
        name: LocalizedName { jp: "坂戸市", en: "Sakado City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11215",
        name: LocalizedName { jp: "狭山市", en: "Sayama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11228",
        name: LocalizedName { jp: "志木市", en: "Shiki City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11221",
        name: LocalizedName { jp: "草加市", en: "Soka City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11241",
        name: LocalizedName { jp: "鶴ヶ島市", en: "Tsurugashima City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11208",
        name: LocalizedName { jp: "所沢市", en: "Tokorozawa City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11224",
        name: LocalizedName { jp: "戸田市", en: "Toda City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11230",
        name: LocalizedName { jp: "新座市", en: "Niiza City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11212",
        name: LocalizedName { jp: "東松山市", en: "Higashimatsuyama City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11218",
        name: LocalizedName { jp: "深谷市", en: "Fukaya City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11235",
        name: LocalizedName { jp: "富士見市", en: "Fujimi City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11245",
        name: LocalizedName { jp: "ふじみ野市", en: "Fujimino City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11211",
        name: LocalizedName { jp: "本庄市", en: "Honjo City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11237",
        name: LocalizedName { jp: "三郷市", en: "Misato City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11243",
        name: LocalizedName { jp: "吉川市", en: "Yoshikawa City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11229",
        name: LocalizedName { jp: "和光市", en: "Wako City" },
        prefecture: "saitama",
    },
    PostalArea {
        code: "11223",
        name: LocalizedName { jp: "蕨市", en: "Warabi City" },
        prefecture: "saitama",
    },
];
