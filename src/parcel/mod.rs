// src/parcel/mod.rs
pub mod cities;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use resolver::Resolver;
pub use types::{LookupError, ParcelRecord};
