// src/gui/pages/intake.rs
//
// Tab 1: property lookup plus the project/client token fields. The
// lookup summary fields are read-only mirrors of the last result;
// zoning and future land use stay hand-entered.

use eframe::egui;

use crate::config::state::{County, PageKind};

use super::{AppCtx, Page};

pub struct IntakePage;
pub static PAGE: IntakePage = IntakePage;

impl Page for IntakePage {
    fn title(&self) -> &'static str { "Project Intake" }
    fn kind(&self) -> PageKind { PageKind::Intake }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.columns(2, |cols| {
            draw_lookup_column(&mut cols[0], ctx);
            draw_token_column(&mut cols[1], ctx);
        });
    }
}

fn read_only_field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(label);
    let mut text = value;
    ui.add(
        egui::TextEdit::singleline(&mut text)
            .desired_width(f32::INFINITY)
            .interactive(false),
    );
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
}

fn draw_lookup_column(ui: &mut egui::Ui, ctx: &mut AppCtx) {
    ui.strong("Property Lookup");

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut ctx.state.gui.parcel_input)
                .hint_text("e.g. 19-31-17-73166-001-0010")
                .desired_width(260.0),
        );

        let intake = &mut ctx.state.proposal.intake;
        egui::ComboBox::from_id_salt("county")
            .selected_text(intake.county.name())
            .show_ui(ui, |ui| {
                for county in County::ALL {
                    ui.selectable_value(&mut intake.county, county, county.name());
                }
            });
    });

    let clicked = ui
        .add_enabled(
            !ctx.running,
            egui::Button::new("Lookup Property Data").min_size(egui::vec2(220.0, 28.0)),
        )
        .clicked();
    if clicked {
        *ctx.lookup_request = Some(ctx.state.gui.parcel_input.clone());
    }

    // Zoning/land-use map link for the resolved municipality
    let city = ctx.state.proposal.intake.city.clone();
    let button_label = if city.is_empty() {
        s!("Open Zoning and Land Use Map")
    } else {
        format!("Open {city} Zoning and Land Use Map")
    };
    match ctx.cities.map_url(&city) {
        Some(url) => {
            if ui.button(button_label.as_str()).clicked() {
                ctx.egui_ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
        None => {
            ui.add_enabled(false, egui::Button::new(button_label.as_str()));
            ui.small("No city map link found for this municipality.");
        }
    }

    ui.add_space(8.0);
    ui.strong("Lookup Summary (auto-fills tokens)");

    let intake = &mut ctx.state.proposal.intake;
    read_only_field(ui, "County", intake.county.name());
    read_only_field(ui, "City", &intake.city);
    read_only_field(ui, "Address", &intake.address);
    read_only_field(ui, "Owner", &intake.owner);
    read_only_field(ui, "Land Use", &intake.land_use);
    text_field(ui, "Zoning (full)", &mut intake.zoning);
    text_field(ui, "Future Land Use (full)", &mut intake.future_land_use);
    read_only_field(ui, "Site Area (acres)", &intake.site_area_acres);
    read_only_field(ui, "Site Area (sf)", &intake.site_area_sqft);
    read_only_field(ui, "Zip", &intake.zip);
}

fn draw_token_column(ui: &mut egui::Ui, ctx: &mut AppCtx) {
    let project = &mut ctx.state.proposal.project;
    ui.strong("Project (tokens)");
    text_field(ui, "Project Name", &mut project.project_name);
    text_field(ui, "Project Location / Address", &mut project.project_location);
    text_field(ui, "Proposal Date (optional)", &mut project.proposal_date);

    ui.add_space(8.0);

    let client = &mut ctx.state.proposal.client;
    ui.strong("Client / Entity (tokens)");
    text_field(ui, "Client Name", &mut client.client_name);
    text_field(ui, "Client Contact Name", &mut client.contact_name);
    text_field(ui, "Client Legal Entity (Sunbiz)", &mut client.entity_name);
    ui.label("Entity Address");
    ui.add(
        egui::TextEdit::multiline(&mut client.entity_address)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
}
