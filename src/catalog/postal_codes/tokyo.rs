use crate::models::{LocalizedName, PostalArea};

pub const POSTAL_CODES_TOKYO: &[PostalArea] = &[
    PostalArea {
        code: "13207",
        name: LocalizedName { jp: "昭島市", en: "Akishima City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13228",
        name: LocalizedName { jp: "あきる野市", en: "Akiruno City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13121",
        name: LocalizedName { jp: "足立区", en: "Adachi Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13118",
        name: LocalizedName { jp: "荒川区", en: "Arakawa Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13119",
        name: LocalizedName { jp: "板橋区", en: "Itabashi Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13225",
        name: LocalizedName { jp: "稲城市", en: "Inagi City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13123",
        name: LocalizedName { jp: "江戸川区", en: "Edogawa Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13205",
        name: LocalizedName { jp: "青梅市", en: "Ome City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13111",
        name: LocalizedName { jp: "大田区", en: "Ota Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13122",
        name: LocalizedName { jp: "葛飾区", en: "Katsushika Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13117",
        name: LocalizedName { jp: "北区", en: "Kita Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13221",
        name: LocalizedName { jp: "清瀬市", en: "Kiyose City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13215",
        name: LocalizedName { jp: "国立市", en: "Kunitachi City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13108",
        name: LocalizedName { jp: "江東区", en: "Koto Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13210",
        name: LocalizedName { jp: "小金井市", en: "Koganei City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13214",
        name: LocalizedName { jp: "国分寺市", en: "Kokubunji City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13211",
        name: LocalizedName { jp: "小平市", en: "Kodaira City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13219",
        name: LocalizedName { jp: "狛江市", en: "Komae City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13109",
        name: LocalizedName { jp: "品川区", en: "Shinagawa Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13113",
        name: LocalizedName { jp: "渋谷区", en: "Shibuya Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13104",
        name: LocalizedName { jp: "新宿区", en: "Shinjuku Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13115",
        name: LocalizedName { jp: "杉並区", en: "Suginami Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13107",
        name: LocalizedName { jp: "墨田区", en: "Sumida Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13112",
        name: LocalizedName { jp: "世田谷区", en: "Setagaya Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13106",
        name: LocalizedName { jp: "台東区", en: "Taito Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13202",
        name: LocalizedName { jp: "立川市", en: "Tachikawa City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13224",
        name: LocalizedName { jp: "多摩市", en: "Tama City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13102",
        name: LocalizedName { jp: "中央区", en: "Chuo Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13208",
        name: LocalizedName { jp: "調布市", en: "Chofu City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13101",
        name: LocalizedName { jp: "千代田区", en: "Chiyoda Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13116",
        name: LocalizedName { jp: "豊島区", en: "Toshima Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13114",
        name: LocalizedName { jp: "中野区", en: "Nakano Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13229",
        name: LocalizedName { jp: "西東京市", en: "Nishitokyo City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13120",
        name: LocalizedName { jp: "練馬区", en: "Nerima Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13201",
        name: LocalizedName { jp: "八王子市", en: "Hachioji City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13227",
        name: LocalizedName { jp: "羽村市", en: "Hamura City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13222",
        name: LocalizedName { jp: "東久留米市", en: "Higashikurume City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13213",
        name: LocalizedName { jp: "東村山市", en: "Higashimurayama City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13220",
        name: LocalizedName { jp: "東大和市", en: "Higashiyamato City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13212",
        name: LocalizedName { jp: "日野市", en: "Hino City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13218",
        name: LocalizedName { jp: "福生市", en: "Fussa City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13206",
        name: LocalizedName { jp: "府中市", en: "Fuchu City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13105",
        name: LocalizedName { jp: "文京区", en: "Bunkyo Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13209",
        name: LocalizedName { jp: "町田市", en: "Machida City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13204",
        name: LocalizedName { jp: "三鷹市", en: "Mitaka City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13103",
        name: LocalizedName { jp: "港区", en: "Minato Ward" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13203",
        name: LocalizedName { jp: "武蔵野市", en: "Musashino City" },
        prefecture: "tokyo",
    },
    PostalArea {
        code: "13110",
        name: LocalizedName { jp: "目黒区", en: "Meguro Ward" },
        prefecture: "tokyo",
    },
];
