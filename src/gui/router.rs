// src/gui/router.rs
use crate::config::state::PageKind::{self, *};

use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::intake::PAGE,
    &pages::understanding::PAGE,
    &pages::scope::PAGE,
    &pages::permitting::PAGE,
    &pages::billing::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Intake => &pages::intake::PAGE,
        Understanding => &pages::understanding::PAGE,
        Scope => &pages::scope::PAGE,
        Permitting => &pages::permitting::PAGE,
        Billing => &pages::billing::PAGE,
    }
}
