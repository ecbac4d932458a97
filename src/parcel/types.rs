// src/parcel/types.rs
use serde::Serialize;
use thiserror::Error;

use crate::core::net::NetError;

/// Resolved property data, one per lookup. All plain strings; empty
/// means the backend didn't have it (or the details page fell through).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParcelRecord {
    pub owner: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub land_use: String,
    pub legal_description: String,
    /// Thousands-separated integer, e.g. "10,500"
    pub site_area_sqft: String,
    /// Two decimals, e.g. "0.24"
    pub site_area_acres: String,
    /// Separator-free alternate key used by the details page
    pub strap: String,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Parcel ID cannot be empty")]
    EmptyId,

    #[error("Parcel ID must be 30 characters or less")]
    IdTooLong,

    #[error("Invalid characters in parcel ID")]
    InvalidChars,

    #[error("Property lookup is only implemented for Pinellas County right now")]
    UnsupportedCounty,

    #[error("Parcel not found in PCPAO database")]
    NotFound,

    #[error("No property data returned")]
    NoData,

    #[error("Error querying PCPAO API: {0}")]
    Api(String),
}

impl From<NetError> for LookupError {
    fn from(e: NetError) -> Self {
        LookupError::Api(e.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Api(e.to_string())
    }
}
