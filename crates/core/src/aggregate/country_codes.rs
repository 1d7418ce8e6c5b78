//! Static lookup from country display name to ISO 3166-1 alpha-3 code.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lowercase display name → uppercase alpha-3 code.
///
/// Names are the spellings used by catalog exports, including a few common
/// aliases (e.g. both "czech republic" and "czechia").
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("afghanistan", "AFG"),
    ("albania", "ALB"),
    ("algeria", "DZA"),
    ("angola", "AGO"),
    ("argentina", "ARG"),
    ("armenia", "ARM"),
    ("australia", "AUS"),
    ("austria", "AUT"),
    ("azerbaijan", "AZE"),
    ("bahamas", "BHS"),
    ("bangladesh", "BGD"),
    ("belarus", "BLR"),
    ("belgium", "BEL"),
    ("bermuda", "BMU"),
    ("bolivia", "BOL"),
    ("bosnia and herzegovina", "BIH"),
    ("botswana", "BWA"),
    ("brazil", "BRA"),
    ("bulgaria", "BGR"),
    ("burkina faso", "BFA"),
    ("cambodia", "KHM"),
    ("cameroon", "CMR"),
    ("canada", "CAN"),
    ("cayman islands", "CYM"),
    ("chile", "CHL"),
    ("china", "CHN"),
    ("colombia", "COL"),
    ("costa rica", "CRI"),
    ("croatia", "HRV"),
    ("cuba", "CUB"),
    ("cyprus", "CYP"),
    ("czech republic", "CZE"),
    ("czechia", "CZE"),
    ("denmark", "DNK"),
    ("dominican republic", "DOM"),
    ("ecuador", "ECU"),
    ("egypt", "EGY"),
    ("estonia", "EST"),
    ("ethiopia", "ETH"),
    ("fiji", "FJI"),
    ("finland", "FIN"),
    ("france", "FRA"),
    ("georgia", "GEO"),
    ("germany", "DEU"),
    ("ghana", "GHA"),
    ("greece", "GRC"),
    ("greenland", "GRL"),
    ("guatemala", "GTM"),
    ("hong kong", "HKG"),
    ("hungary", "HUN"),
    ("iceland", "ISL"),
    ("india", "IND"),
    ("indonesia", "IDN"),
    ("iran", "IRN"),
    ("iraq", "IRQ"),
    ("ireland", "IRL"),
    ("israel", "ISR"),
    ("italy", "ITA"),
    ("jamaica", "JAM"),
    ("japan", "JPN"),
    ("jordan", "JOR"),
    ("kazakhstan", "KAZ"),
    ("kenya", "KEN"),
    ("kuwait", "KWT"),
    ("latvia", "LVA"),
    ("lebanon", "LBN"),
    ("liechtenstein", "LIE"),
    ("lithuania", "LTU"),
    ("luxembourg", "LUX"),
    ("malawi", "MWI"),
    ("malaysia", "MYS"),
    ("malta", "MLT"),
    ("mauritius", "MUS"),
    ("mexico", "MEX"),
    ("monaco", "MCO"),
    ("mongolia", "MNG"),
    ("montenegro", "MNE"),
    ("morocco", "MAR"),
    ("mozambique", "MOZ"),
    ("namibia", "NAM"),
    ("nepal", "NPL"),
    ("netherlands", "NLD"),
    ("new zealand", "NZL"),
    ("nicaragua", "NIC"),
    ("nigeria", "NGA"),
    ("north korea", "PRK"),
    ("norway", "NOR"),
    ("pakistan", "PAK"),
    ("panama", "PAN"),
    ("paraguay", "PRY"),
    ("peru", "PER"),
    ("philippines", "PHL"),
    ("poland", "POL"),
    ("portugal", "PRT"),
    ("puerto rico", "PRI"),
    ("qatar", "QAT"),
    ("romania", "ROU"),
    ("russia", "RUS"),
    ("rwanda", "RWA"),
    ("samoa", "WSM"),
    ("saudi arabia", "SAU"),
    ("senegal", "SEN"),
    ("serbia", "SRB"),
    ("singapore", "SGP"),
    ("slovakia", "SVK"),
    ("slovenia", "SVN"),
    ("somalia", "SOM"),
    ("south africa", "ZAF"),
    ("south korea", "KOR"),
    ("soviet union", "RUS"),
    ("spain", "ESP"),
    ("sri lanka", "LKA"),
    ("sudan", "SDN"),
    ("sweden", "SWE"),
    ("switzerland", "CHE"),
    ("syria", "SYR"),
    ("taiwan", "TWN"),
    ("tanzania", "TZA"),
    ("thailand", "THA"),
    ("trinidad and tobago", "TTO"),
    ("tunisia", "TUN"),
    ("turkey", "TUR"),
    ("uganda", "UGA"),
    ("ukraine", "UKR"),
    ("united arab emirates", "ARE"),
    ("united kingdom", "GBR"),
    ("united states", "USA"),
    ("uruguay", "URY"),
    ("uzbekistan", "UZB"),
    ("vatican city", "VAT"),
    ("venezuela", "VEN"),
    ("vietnam", "VNM"),
    ("west germany", "DEU"),
    ("zambia", "ZMB"),
    ("zimbabwe", "ZWE"),
];

static LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_CODES.iter().copied().collect());

/// Look up the alpha-3 code for a display name, ignoring case and
/// surrounding whitespace. Unknown names have no code.
pub fn country_code(name: &str) -> Option<&'static str> {
    LOOKUP.get(name.trim().to_lowercase().as_str()).copied()
}
