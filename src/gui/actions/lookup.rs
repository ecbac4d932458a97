// src/gui/actions/lookup.rs
//
// Starts the property lookup on a worker thread. One in flight at a
// time; the button is disabled while the receiver is live.

use std::{sync::mpsc, thread};

use eframe::egui;

use crate::config::state::County;
use crate::gui::app::{App, LookupOutcome};
use crate::parcel::{LookupError, Resolver, normalize};

pub fn start(app: &mut App, egui_ctx: &egui::Context, input: String) {
    if app.running() {
        return;
    }

    let county = app.state.proposal.intake.county;
    if county != County::Pinellas {
        // County and parcel id are still recorded so the rest of the
        // form can proceed by hand.
        app.state.proposal.intake.parcel_id = input;
        app.status(LookupError::UnsupportedCounty.to_string());
        return;
    }

    // Validation errors surface inline without spawning the worker.
    if let Err(e) = normalize::validate(&input) {
        app.status(e.to_string());
        return;
    }

    tracing::info!(parcel = %input, "lookup: begin");
    app.status("Fetching property data from PCPAO API…");

    let (tx, rx) = mpsc::channel();
    app.lookup_rx = Some(rx);

    let cities = app.cities.clone();
    let repaint = egui_ctx.clone();
    thread::spawn(move || {
        let result = Resolver::default().resolve(&input, &cities);
        let _ = tx.send(LookupOutcome { input, result });
        repaint.request_repaint();
    });
}
