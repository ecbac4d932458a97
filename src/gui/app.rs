// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
};

use eframe::egui;

use crate::config::state::AppState;
use crate::parcel::cities::CityLookup;
use crate::parcel::{LookupError, ParcelRecord};

use super::{actions, components, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Proposal Desk",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// What the lookup worker sends back: the raw input it ran with and
/// the outcome.
pub struct LookupOutcome {
    pub input: String,
    pub result: Result<ParcelRecord, LookupError>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once at startup; shared with lookup workers
    pub cities: Arc<CityLookup>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // one lookup in flight at a time
    pub lookup_rx: Option<mpsc::Receiver<LookupOutcome>>,

    // last address a lookup wrote into project_location, so the
    // auto-fill stops once the user overrides it
    pub last_autofill_address: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cities = Arc::new(CityLookup::load());
        tracing::info!("init: city table loaded, default page Intake");

        Self {
            state,
            cities,
            status: Arc::new(Mutex::new(s!("Idle"))),
            lookup_rx: None,
            last_autofill_address: s!(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn running(&self) -> bool { self.lookup_rx.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Drain the worker channel; apply at most one outcome per frame.
    fn poll_lookup(&mut self) {
        let Some(rx) = &self.lookup_rx else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.lookup_rx = None;
                self.apply_lookup(outcome);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                // worker died without reporting; release the button
                self.lookup_rx = None;
                self.status("Lookup failed");
            }
        }
    }

    fn apply_lookup(&mut self, outcome: LookupOutcome) {
        let record = match outcome.result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "lookup failed");
                self.status(e.to_string());
                return;
            }
        };

        let intake = &mut self.state.proposal.intake;
        intake.parcel_id = outcome.input;
        intake.address = record.address;
        intake.city = record.city;
        intake.zip = record.zip;
        intake.owner = record.owner;
        intake.land_use = record.land_use;
        intake.site_area_sqft = record.site_area_sqft;
        intake.site_area_acres = record.site_area_acres;
        intake.municipality = intake.city.clone();
        intake.jurisdiction_display = intake.city.clone();

        // Auto-fill the project location until the user has typed
        // their own value over it.
        let project = &mut self.state.proposal.project;
        if !intake.address.is_empty()
            && (project.project_location.is_empty()
                || project.project_location == self.last_autofill_address)
        {
            project.project_location = intake.address.clone();
            self.last_autofill_address = intake.address.clone();
        }

        self.status("Property data retrieved");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_lookup();

        let mut lookup_request: Option<String> = None;

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = router::all_pages()[self.current_index()];
            let mut page_ctx = super::pages::AppCtx {
                egui_ctx: ctx,
                state: &mut self.state,
                cities: &self.cities,
                running: self.lookup_rx.is_some(),
                lookup_request: &mut lookup_request,
            };
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    page.draw(ui, &mut page_ctx);
                });
        });

        if let Some(input) = lookup_request {
            actions::lookup::start(self, ctx, input);
        }
    }
}
