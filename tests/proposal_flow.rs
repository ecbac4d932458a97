// tests/proposal_flow.rs
//
// Walks a whole proposal through the form state the way the tabs do:
// intake tokens land, assumptions/tasks/permits get checked, a fee is
// overridden, and the preview comes out with every section filled.

use proposal_desk::config::state::ProposalState;
use proposal_desk::proposal::{catalog, fees, preview};
use proposal_desk::s;

fn filled_state() -> ProposalState {
    let mut p = ProposalState::default();

    // What apply_lookup writes after a successful resolve
    p.intake.parcel_id = s!("19-31-17-73166-001-0010");
    p.intake.address = s!("123 MAIN ST N");
    p.intake.city = s!("St. Petersburg");
    p.intake.zip = s!("33701");
    p.intake.owner = s!("SMITH JOHN & JANE");
    p.intake.land_use = s!("Single Family");
    p.intake.site_area_sqft = s!("10,500");
    p.intake.site_area_acres = s!("0.24");
    p.intake.municipality = p.intake.city.clone();
    p.intake.jurisdiction_display = p.intake.city.clone();

    // Hand-entered
    p.intake.zoning = s!("CCS-1");
    p.intake.future_land_use = s!("Planned Redevelopment-Mixed Use");
    p.project.description_short =
        s!("Client plans to develop a 4,200 sf retail outparcel with associated parking.");

    p.project
        .assumptions_checked
        .insert(s!("assump_one_phase"), true);
    p.project
        .assumptions_checked
        .insert(s!("assump_no_wetlands"), true);
    p.project.assumptions_other = s!("Phasing beyond one permit set is excluded.");

    p.scope
        .task_ids
        .insert(s!("task_due_diligence_site_review"), true);
    p.scope
        .task_ids
        .insert(s!("task_civil_construction_documents"), true);
    p.permits.permit_ids.insert(s!("permit_cosp_civil"), true);
    p.permits.permit_other = s!("Duke Energy vault permit");
    p.ca_tasks
        .task_ids
        .insert(s!("task_110_construction_phase_services"), true);

    p.billing
        .overrides
        .insert(s!("task_civil_construction_documents"), 52_000);
    p
}

#[test]
fn full_proposal_renders_every_section() {
    let p = filled_state();
    let text = preview::render(&p);

    assert!(text.contains("PROJECT UNDERSTANDING"));
    assert!(text.contains("The site is located at 123 MAIN ST N, St. Petersburg, Pinellas County"));
    assert!(text.contains("Zoning: CCS-1"));

    assert!(text.contains("PROJECT ASSUMPTIONS"));
    assert!(text.contains("- The project will be designed, permitted, and constructed in one phase."));
    assert!(text.contains("Phasing beyond one permit set is excluded."));

    assert!(text.contains("SCOPE OF SERVICES"));
    assert!(text.contains("Due-Diligence and Site Review"));
    assert!(text.contains("Civil Construction Documents"));

    assert!(text.contains("TASK 107 — PERMITTING"));
    assert!(text.contains("- City of St. Petersburg Commercial Plan Site Civil Permit"));
    assert!(text.contains("- Duke Energy vault permit"));

    assert!(text.contains("TASKS 108–110"));
    assert!(text.contains("Task 110 — Construction Phase Services"));

    assert!(text.contains("FEE SCHEDULE"));
    assert!(text.contains("Civil Construction Documents — $52,000"));
    assert!(text.contains("Total — $72,000"));
}

#[test]
fn fee_total_tracks_override_and_selection() {
    let p = filled_state();
    // 4,500 base + 52,000 override + 15,500 base
    assert_eq!(fees::total(&p), 72_000);

    let lines = fees::schedule(&p);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| catalog::scope_task(l.id).is_some()
        || catalog::ca_task(l.id).is_some()));
}

#[test]
fn deselecting_a_task_drops_its_override_from_the_total() {
    let mut p = filled_state();
    p.scope
        .task_ids
        .insert(s!("task_civil_construction_documents"), false);
    assert_eq!(fees::total(&p), 4_500 + 15_500);
}
