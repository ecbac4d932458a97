// src/parcel/cities.rs
//
// Tax-district code → city name expansion, plus the optional local
// metadata table that carries each municipality's zoning/land-use map
// application URL.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::config::consts::{CITY_LOOKUP_FILE, DEFAULT_CITY_LABEL};
use crate::core::sanitize::title_case;

/// Tax-district abbreviations the quicksearch grid returns, mapped to
/// canonical city names. The backend is not consistent about which
/// form it sends, so full names appear here too.
const CITY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("SP", "St. Petersburg"),
    ("ST PETERSBURG", "St. Petersburg"),
    ("ST. PETERSBURG", "St. Petersburg"),
    ("CLEARWATER", "Clearwater"),
    ("CW", "Clearwater"),
    ("CWD", "Clearwater"),
    ("LARGO", "Largo"),
    ("LA", "Largo"),
    ("PINELLAS PARK", "Pinellas Park"),
    ("PP", "Pinellas Park"),
    ("DUNEDIN", "Dunedin"),
    ("TARPON SPRINGS", "Tarpon Springs"),
    ("TS", "Tarpon Springs"),
    ("SEMINOLE", "Seminole"),
    ("KENNETH CITY", "Kenneth City"),
    ("GULFPORT", "Gulfport"),
    ("MB", "Madeira Beach"),
    ("MADEIRA BEACH", "Madeira Beach"),
    ("REDINGTON BEACH", "Redington Beach"),
    ("TREASURE ISLAND", "Treasure Island"),
    ("ST PETE BEACH", "St. Pete Beach"),
    ("SOUTH PASADENA", "South Pasadena"),
    ("BELLEAIR", "Belleair"),
    ("BELLEAIR BEACH", "Belleair Beach"),
    ("BELLEAIR BLUFFS", "Belleair Bluffs"),
    ("INDIAN ROCKS BEACH", "Indian Rocks Beach"),
    ("INDIAN SHORES", "Indian Shores"),
    ("NORTH REDINGTON BEACH", "North Redington Beach"),
    ("OLDSMAR", "Oldsmar"),
    ("SAFETY HARBOR", "Safety Harbor"),
    ("LFPW", "Unincorporated Pinellas (Lealman)"),
    ("LEALMAN", "Unincorporated Pinellas (Lealman)"),
    ("UNINCORPORATED", "Unincorporated Pinellas"),
    ("COUNTY", "Unincorporated Pinellas"),
];

/// Map-application URL keys, tried in priority order.
const MAP_URL_KEYS: &[&str] = &[
    "zoning_flu_app",
    "zoning_lookup_app",
    "zoning_app",
    "gis_viewer_app",
    "future_land_use_2045_app",
    "open_data_hub",
    "mapserver",
];

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CityMeta {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Everything else: map-app URLs keyed by application kind.
    #[serde(flatten)]
    pub urls: HashMap<String, serde_json::Value>,
}

/// City metadata, loaded once at startup. A missing or corrupt file
/// degrades to an empty table; expansion still works from the static
/// abbreviation list.
#[derive(Clone, Debug, Default)]
pub struct CityLookup {
    by_name: HashMap<String, CityMeta>,
    abbreviations: HashMap<String, String>,
}

impl CityLookup {
    pub fn load() -> Self {
        Self::load_from(CITY_LOOKUP_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let raw: HashMap<String, CityMeta> = fs::read_to_string(path.as_ref())
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        if raw.is_empty() {
            tracing::warn!(
                path = %path.as_ref().display(),
                "city lookup table missing or unreadable, map links disabled"
            );
        }
        Self::from_table(raw)
    }

    pub fn from_table(table: HashMap<String, CityMeta>) -> Self {
        let mut abbreviations: HashMap<String, String> = CITY_ABBREVIATIONS
            .iter()
            .map(|(abbr, name)| (s!(*abbr), s!(*name)))
            .collect();

        // Entries tagged city_app extend the abbreviation table with
        // identity mappings so a full name round-trips.
        for (name, meta) in &table {
            if meta.kind.as_deref() == Some("city_app") {
                let upper = name.trim().to_uppercase();
                abbreviations
                    .entry(upper.clone())
                    .or_insert_with(|| title_case(&upper));
            }
        }

        let by_name = table
            .into_iter()
            .map(|(name, meta)| (name.trim().to_lowercase(), meta))
            .collect();

        Self { by_name, abbreviations }
    }

    /// Total: unknown codes pass through unchanged, empty codes get the
    /// unincorporated default.
    pub fn expand(&self, abbr: &str) -> String {
        let trimmed = abbr.trim();
        if trimmed.is_empty() {
            return s!(DEFAULT_CITY_LABEL);
        }
        self.abbreviations
            .get(&trimmed.to_uppercase())
            .cloned()
            .unwrap_or_else(|| s!(trimmed))
    }

    /// The municipality's zoning/land-use map URL, if its metadata
    /// entry carries one.
    pub fn map_url(&self, city: &str) -> Option<&str> {
        let meta = self.by_name.get(&city.trim().to_lowercase())?;
        for key in MAP_URL_KEYS {
            if let Some(url) = meta.urls.get(*key).and_then(|v| v.as_str()) {
                if !url.is_empty() {
                    return Some(url);
                }
            }
        }
        None
    }
}
