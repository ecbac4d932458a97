// src/config/consts.rs

// Net config
pub const PCPAO_BASE: &str = "https://www.pcpao.gov";
pub const SEARCH_PATH: &str = "/dal/quicksearch/searchProperty";
pub const DETAILS_PATH: &str = "/property-details";
pub const USER_AGENT: &str = concat!("proposal_desk/", env!("CARGO_PKG_VERSION"));

// Per-call ceilings
pub const SEARCH_TIMEOUT_SECS: u64 = 15;
pub const DETAILS_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// Retry policy: 3 attempts total, exponential back-off from 1 s
pub const MAX_RETRIES: u32 = 2;
pub const BACKOFF_BASE_SECS: u64 = 1;

// Quicksearch grid schema
pub const GRID_COLUMNS: usize = 11;
pub const SEARCH_SORT: &str = "parcel_number";

// Local data
pub const CITY_LOOKUP_FILE: &str = "data/pinellas_city_lookup.json";

// Intake defaults
pub const DEFAULT_CITY_LABEL: &str = "Unincorporated Pinellas";
