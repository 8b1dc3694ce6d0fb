//! ISO 3166-1 alpha-2 country codes.

use core::any::Any;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use valueobjects_core::{
    FromNative, ValueObject, ValueObjectError, ValueObjectResult, expect_arity, expect_str,
    same_variant,
};

macro_rules! country_codes {
    ($($code:ident => $name:literal),+ $(,)?) => {
        /// A known two-letter country code.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum CountryCode {
            $($code,)+
        }

        impl CountryCode {
            /// Every known code, in alphabetical order.
            pub const ALL: &'static [CountryCode] = &[$(CountryCode::$code,)+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(CountryCode::$code => stringify!($code),)+
                }
            }

            /// English short name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(CountryCode::$code => $name,)+
                }
            }
        }

        impl FromStr for CountryCode {
            type Err = ValueObjectError;

            /// Exact, case-sensitive match on the upper-case code.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($code) => Ok(CountryCode::$code),)+
                    _ => {
                        tracing::debug!(code = s, "unresolvable country code");
                        Err(ValueObjectError::unknown_country_code(s))
                    }
                }
            }
        }
    };
}

country_codes! {
    AD => "Andorra",
    AE => "United Arab Emirates",
    AF => "Afghanistan",
    AG => "Antigua and Barbuda",
    AI => "Anguilla",
    AL => "Albania",
    AM => "Armenia",
    AO => "Angola",
    AQ => "Antarctica",
    AR => "Argentina",
    AS => "American Samoa",
    AT => "Austria",
    AU => "Australia",
    AW => "Aruba",
    AX => "Åland Islands",
    AZ => "Azerbaijan",
    BA => "Bosnia and Herzegovina",
    BB => "Barbados",
    BD => "Bangladesh",
    BE => "Belgium",
    BF => "Burkina Faso",
    BG => "Bulgaria",
    BH => "Bahrain",
    BI => "Burundi",
    BJ => "Benin",
    BL => "Saint Barthélemy",
    BM => "Bermuda",
    BN => "Brunei Darussalam",
    BO => "Bolivia",
    BQ => "Bonaire, Sint Eustatius and Saba",
    BR => "Brazil",
    BS => "Bahamas",
    BT => "Bhutan",
    BV => "Bouvet Island",
    BW => "Botswana",
    BY => "Belarus",
    BZ => "Belize",
    CA => "Canada",
    CC => "Cocos (Keeling) Islands",
    CD => "Congo, the Democratic Republic of the",
    CF => "Central African Republic",
    CG => "Congo",
    CH => "Switzerland",
    CI => "Côte d'Ivoire",
    CK => "Cook Islands",
    CL => "Chile",
    CM => "Cameroon",
    CN => "China",
    CO => "Colombia",
    CR => "Costa Rica",
    CU => "Cuba",
    CV => "Cabo Verde",
    CW => "Curaçao",
    CX => "Christmas Island",
    CY => "Cyprus",
    CZ => "Czechia",
    DE => "Germany",
    DJ => "Djibouti",
    DK => "Denmark",
    DM => "Dominica",
    DO => "Dominican Republic",
    DZ => "Algeria",
    EC => "Ecuador",
    EE => "Estonia",
    EG => "Egypt",
    EH => "Western Sahara",
    ER => "Eritrea",
    ES => "Spain",
    ET => "Ethiopia",
    FI => "Finland",
    FJ => "Fiji",
    FK => "Falkland Islands (Malvinas)",
    FM => "Micronesia, Federated States of",
    FO => "Faroe Islands",
    FR => "France",
    GA => "Gabon",
    GB => "United Kingdom",
    GD => "Grenada",
    GE => "Georgia",
    GF => "French Guiana",
    GG => "Guernsey",
    GH => "Ghana",
    GI => "Gibraltar",
    GL => "Greenland",
    GM => "Gambia",
    GN => "Guinea",
    GP => "Guadeloupe",
    GQ => "Equatorial Guinea",
    GR => "Greece",
    GS => "South Georgia and the South Sandwich Islands",
    GT => "Guatemala",
    GU => "Guam",
    GW => "Guinea-Bissau",
    GY => "Guyana",
    HK => "Hong Kong",
    HM => "Heard Island and McDonald Islands",
    HN => "Honduras",
    HR => "Croatia",
    HT => "Haiti",
    HU => "Hungary",
    ID => "Indonesia",
    IE => "Ireland",
    IL => "Israel",
    IM => "Isle of Man",
    IN => "India",
    IO => "British Indian Ocean Territory",
    IQ => "Iraq",
    IR => "Iran",
    IS => "Iceland",
    IT => "Italy",
    JE => "Jersey",
    JM => "Jamaica",
    JO => "Jordan",
    JP => "Japan",
    KE => "Kenya",
    KG => "Kyrgyzstan",
    KH => "Cambodia",
    KI => "Kiribati",
    KM => "Comoros",
    KN => "Saint Kitts and Nevis",
    KP => "Korea, Democratic People's Republic of",
    KR => "Korea, Republic of",
    KW => "Kuwait",
    KY => "Cayman Islands",
    KZ => "Kazakhstan",
    LA => "Lao People's Democratic Republic",
    LB => "Lebanon",
    LC => "Saint Lucia",
    LI => "Liechtenstein",
    LK => "Sri Lanka",
    LR => "Liberia",
    LS => "Lesotho",
    LT => "Lithuania",
    LU => "Luxembourg",
    LV => "Latvia",
    LY => "Libya",
    MA => "Morocco",
    MC => "Monaco",
    MD => "Moldova",
    ME => "Montenegro",
    MF => "Saint Martin (French part)",
    MG => "Madagascar",
    MH => "Marshall Islands",
    MK => "North Macedonia",
    ML => "Mali",
    MM => "Myanmar",
    MN => "Mongolia",
    MO => "Macao",
    MP => "Northern Mariana Islands",
    MQ => "Martinique",
    MR => "Mauritania",
    MS => "Montserrat",
    MT => "Malta",
    MU => "Mauritius",
    MV => "Maldives",
    MW => "Malawi",
    MX => "Mexico",
    MY => "Malaysia",
    MZ => "Mozambique",
    NA => "Namibia",
    NC => "New Caledonia",
    NE => "Niger",
    NF => "Norfolk Island",
    NG => "Nigeria",
    NI => "Nicaragua",
    NL => "Netherlands",
    NO => "Norway",
    NP => "Nepal",
    NR => "Nauru",
    NU => "Niue",
    NZ => "New Zealand",
    OM => "Oman",
    PA => "Panama",
    PE => "Peru",
    PF => "French Polynesia",
    PG => "Papua New Guinea",
    PH => "Philippines",
    PK => "Pakistan",
    PL => "Poland",
    PM => "Saint Pierre and Miquelon",
    PN => "Pitcairn",
    PR => "Puerto Rico",
    PS => "Palestine, State of",
    PT => "Portugal",
    PW => "Palau",
    PY => "Paraguay",
    QA => "Qatar",
    RE => "Réunion",
    RO => "Romania",
    RS => "Serbia",
    RU => "Russian Federation",
    RW => "Rwanda",
    SA => "Saudi Arabia",
    SB => "Solomon Islands",
    SC => "Seychelles",
    SD => "Sudan",
    SE => "Sweden",
    SG => "Singapore",
    SH => "Saint Helena, Ascension and Tristan da Cunha",
    SI => "Slovenia",
    SJ => "Svalbard and Jan Mayen",
    SK => "Slovakia",
    SL => "Sierra Leone",
    SM => "San Marino",
    SN => "Senegal",
    SO => "Somalia",
    SR => "Suriname",
    SS => "South Sudan",
    ST => "Sao Tome and Principe",
    SV => "El Salvador",
    SX => "Sint Maarten (Dutch part)",
    SY => "Syrian Arab Republic",
    SZ => "Eswatini",
    TC => "Turks and Caicos Islands",
    TD => "Chad",
    TF => "French Southern Territories",
    TG => "Togo",
    TH => "Thailand",
    TJ => "Tajikistan",
    TK => "Tokelau",
    TL => "Timor-Leste",
    TM => "Turkmenistan",
    TN => "Tunisia",
    TO => "Tonga",
    TR => "Türkiye",
    TT => "Trinidad and Tobago",
    TV => "Tuvalu",
    TW => "Taiwan",
    TZ => "Tanzania, United Republic of",
    UA => "Ukraine",
    UG => "Uganda",
    UM => "United States Minor Outlying Islands",
    US => "United States",
    UY => "Uruguay",
    UZ => "Uzbekistan",
    VA => "Holy See",
    VC => "Saint Vincent and the Grenadines",
    VE => "Venezuela",
    VG => "Virgin Islands, British",
    VI => "Virgin Islands, U.S.",
    VN => "Viet Nam",
    VU => "Vanuatu",
    WF => "Wallis and Futuna",
    WS => "Samoa",
    YE => "Yemen",
    YT => "Mayotte",
    ZA => "South Africa",
    ZM => "Zambia",
    ZW => "Zimbabwe",
}

impl CountryCode {
    pub fn to_native(&self) -> &'static str {
        self.as_str()
    }
}

impl FromNative for CountryCode {
    const ARITY: usize = 1;

    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [value] = expect_arity::<1>(natives, "CountryCode::from_native")?;
        Self::try_from(value)
    }
}

impl TryFrom<&Value> for CountryCode {
    type Error = ValueObjectError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        expect_str(value)?.parse()
    }
}

impl ValueObject for CountryCode {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        same_variant(self, other).is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl core::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_known_codes() {
        let us: CountryCode = "US".parse().unwrap();
        assert_eq!(us, CountryCode::US);
        assert_eq!(us.name(), "United States");
        assert_eq!(us.to_string(), "US");
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert_eq!(
            "us".parse::<CountryCode>().unwrap_err(),
            ValueObjectError::UnknownCountryCode("us".to_string())
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(CountryCode::from_native(&[json!("XX")]).is_err());
        assert!(CountryCode::from_native(&[json!("USA")]).is_err());
    }

    #[test]
    fn every_code_round_trips_through_its_text() {
        for code in CountryCode::ALL {
            assert_eq!(code.as_str().len(), 2);
            assert_eq!(code.as_str().parse::<CountryCode>().unwrap(), *code);
        }
    }

    #[test]
    fn all_is_sorted_and_unique() {
        assert!(CountryCode::ALL.windows(2).all(|w| w[0].as_str() < w[1].as_str()));
    }
}
