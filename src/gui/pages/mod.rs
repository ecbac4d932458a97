// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::state::{AppState, PageKind};
use crate::parcel::cities::CityLookup;

pub mod billing;
pub mod intake;
pub mod permitting;
pub mod scope;
pub mod understanding;

/// Light-weight context pages use to interact with the app.
/// Page methods run quickly and return; the lookup worker runs on its
/// own thread, so a page never blocks the frame.
pub struct AppCtx<'a> {
    pub egui_ctx: &'a egui::Context,

    /// Single source of truth (UI thread only)
    pub state: &'a mut AppState,

    pub cities: &'a CityLookup,

    /// True while a lookup worker is in flight
    pub running: bool,

    /// Set by the intake page to ask the app to start a lookup with
    /// the given parcel-ID input. Consumed after the frame.
    pub lookup_request: &'a mut Option<String>,
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the tab body.
    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx);
}
