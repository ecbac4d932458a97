// src/parcel/resolver.rs
//
// Two-call lookup against the county appraiser's quicksearch backend:
// a form-encoded POST against the paginated grid endpoint, then a
// best-effort GET of the property-details page for land area and zip.
// The second call never fails the lookup; its fields just stay empty.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::consts::{
    DETAILS_PATH, DETAILS_TIMEOUT_SECS, GRID_COLUMNS, PCPAO_BASE, SEARCH_PATH, SEARCH_SORT,
    SEARCH_TIMEOUT_SECS,
};
use crate::core::html::{page_text, strip_tags};
use crate::core::net::{self, RetryPolicy};
use crate::core::sanitize::thousands;

use super::cities::CityLookup;
use super::normalize::{normalize, strap, strip_dor_code, validate};
use super::types::{LookupError, ParcelRecord};

// Fixed row positions in the 11-column quicksearch grid
const COL_OWNER: usize = 2;
const COL_ADDRESS: usize = 5;
const COL_TAX_DISTRICT: usize = 6;
const COL_PROPERTY_USE: usize = 7;
const COL_LEGAL_DESC: usize = 8;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "recordsTotal", default)]
    records_total: u64,
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Default)]
struct DetailFields {
    sqft: Option<u64>,
    acres: Option<f64>,
    zip: Option<String>,
}

pub struct Resolver {
    base: String,
    retry: RetryPolicy,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(PCPAO_BASE)
    }
}

impl Resolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), retry: RetryPolicy::default() }
    }

    /// Override the retry policy. Tests point this at a mock server
    /// with back-off zeroed out.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Resolve a raw user-entered parcel identifier to a record.
    /// Validation and the primary search are hard failures; the
    /// details page is fail-soft.
    pub fn resolve(&self, raw_id: &str, cities: &CityLookup) -> Result<ParcelRecord, LookupError> {
        validate(raw_id)?;
        let normalized = normalize(raw_id);
        tracing::info!(parcel = %normalized, "querying quicksearch");

        let body = net::post_form(
            &join!(&self.base, SEARCH_PATH),
            &search_payload(&normalized, &self.base),
            SEARCH_TIMEOUT_SECS,
            self.retry,
        )?;
        let resp: SearchResponse = serde_json::from_str(&body)?;

        if resp.records_total == 0 {
            return Err(LookupError::NotFound);
        }
        let Some(row) = resp.data.first() else {
            return Err(LookupError::NoData);
        };

        let owner = cell_text(row, COL_OWNER);
        let address = cell_text(row, COL_ADDRESS);
        let tax_district = cell_text(row, COL_TAX_DISTRICT);
        let property_use = cell_text(row, COL_PROPERTY_USE);
        let legal_description = cell_text(row, COL_LEGAL_DESC);

        let strap_key = strap(&normalized);
        let details = self.fetch_details(&strap_key, &normalized).unwrap_or_default();

        Ok(ParcelRecord {
            owner,
            address,
            city: cities.expand(&tax_district),
            zip: details.zip.unwrap_or_default(),
            land_use: strip_dor_code(&property_use),
            legal_description,
            site_area_sqft: details.sqft.map(thousands).unwrap_or_default(),
            site_area_acres: details
                .acres
                .map(|a| format!("{a:.2}"))
                .unwrap_or_default(),
            strap: strap_key,
        })
    }

    /// Secondary lookup. Any transport failure returns None and the
    /// caller carries on with empty area/zip fields.
    fn fetch_details(&self, strap_key: &str, normalized: &str) -> Option<DetailFields> {
        let url = format!(
            "{}{}?s={}&input={}&search_option={}",
            self.base, DETAILS_PATH, strap_key, normalized, SEARCH_SORT
        );
        let html = match net::get_text(&url, DETAILS_TIMEOUT_SECS, self.retry) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(error = %e, "details page fetch failed, continuing without area/zip");
                return None;
            }
        };
        Some(extract_details(&page_text(&html)))
    }
}

fn cell_text(row: &[serde_json::Value], idx: usize) -> String {
    row.get(idx)
        .and_then(|v| v.as_str())
        .map(strip_tags)
        .unwrap_or_default()
}

/// The grid endpoint refuses requests missing its DataTables column
/// metadata, so the payload carries the full 11-column block: first
/// page, one row, sorted by parcel number.
fn search_payload(input: &str, base: &str) -> Vec<(String, String)> {
    let mut p: Vec<(String, String)> = vec![
        (s!("draw"), s!("1")),
        (s!("start"), s!("0")),
        (s!("length"), s!("1")),
        (s!("search[value]"), s!()),
        (s!("search[regex]"), s!("false")),
        (s!("input"), s!(input)),
        (s!("searchsort"), s!(SEARCH_SORT)),
        (s!("url"), s!(base)),
    ];
    for i in 0..GRID_COLUMNS {
        p.push((format!("columns[{i}][data]"), i.to_string()));
        p.push((format!("columns[{i}][name]"), s!()));
        p.push((format!("columns[{i}][searchable]"), s!("true")));
        p.push((
            format!("columns[{i}][orderable]"),
            s!(if i >= 2 { "true" } else { "false" }),
        ));
        p.push((format!("columns[{i}][search][value]"), s!()));
        p.push((format!("columns[{i}][search][regex]"), s!("false")));
    }
    p
}

fn land_area_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Land Area:\s*≅\s*([\d,]+)\s*sf\s*\|\s*≅\s*([\d.]+)\s*acres").unwrap()
    })
}

fn zip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"FL\s*(\d{5})").unwrap())
}

/// Pull land area and zip out of the rendered page text. Each field is
/// independent; an absent pattern just leaves its field None.
fn extract_details(text: &str) -> DetailFields {
    let mut out = DetailFields::default();

    if let Some(caps) = land_area_re().captures(text) {
        out.sqft = caps[1].replace(',', "").parse::<u64>().ok();
        out.acres = caps[2].parse::<f64>().ok();
    }
    if let Some(caps) = zip_re().captures(text) {
        out.zip = Some(s!(&caps[1]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_grid_metadata() {
        let p = search_payload("19-31-17-73166-001-0010", PCPAO_BASE);
        let get = |k: &str| {
            p.iter()
                .find(|(key, _)| key.as_str() == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("input"), Some("19-31-17-73166-001-0010"));
        assert_eq!(get("draw"), Some("1"));
        assert_eq!(get("length"), Some("1"));
        assert_eq!(get("searchsort"), Some("parcel_number"));
        // orderable flips on from column 2
        assert_eq!(get("columns[0][orderable]"), Some("false"));
        assert_eq!(get("columns[1][orderable]"), Some("false"));
        assert_eq!(get("columns[2][orderable]"), Some("true"));
        assert_eq!(get("columns[10][orderable]"), Some("true"));
        assert_eq!(
            p.iter().filter(|(k, _)| k.ends_with("[searchable]")).count(),
            GRID_COLUMNS
        );
    }

    #[test]
    fn extract_details_land_area_and_zip() {
        let text =
            "Site Address 123 MAIN ST N ST PETERSBURG, FL 33701 Land Area: ≅ 10,500 sf | ≅ 0.24 acres";
        let d = extract_details(text);
        assert_eq!(d.sqft, Some(10_500));
        assert_eq!(d.acres, Some(0.24));
        assert_eq!(d.zip.as_deref(), Some("33701"));
    }

    #[test]
    fn extract_details_tolerates_missing_patterns() {
        let d = extract_details("nothing useful here");
        assert_eq!(d.sqft, None);
        assert_eq!(d.acres, None);
        assert_eq!(d.zip, None);
    }

    #[test]
    fn cell_text_strips_markup_and_tolerates_short_rows() {
        let row = vec![
            serde_json::json!("x"),
            serde_json::json!("y"),
            serde_json::json!("<a href='/p/1'>SMITH JOHN</a>"),
        ];
        assert_eq!(cell_text(&row, 2), "SMITH JOHN");
        assert_eq!(cell_text(&row, 5), "");
    }
}
