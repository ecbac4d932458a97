// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;

pub mod gui;
pub mod parcel;
pub mod proposal;
