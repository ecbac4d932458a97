// src/proposal/preview.rs
//
// Deterministic plain-text rendering of the proposal. Sections appear
// only when they have content, so a half-filled form previews clean.

use crate::config::state::ProposalState;

use super::catalog::{ASSUMPTIONS, CA_TASKS, PERMITS, SCOPE_TASKS};
use super::fees::{self, format_usd};

/// The auto-generated project-understanding paragraph, assembled from
/// whichever tokens the intake tab has so far. Empty when nothing is
/// filled in yet.
pub fn understanding_paragraph(p: &ProposalState) -> String {
    let intake = &p.intake;
    let mut parts: Vec<String> = Vec::new();

    let desc = p.project.description_short.trim();
    if !desc.is_empty() {
        parts.push(s!(desc.trim_end_matches('.')));
    }

    let mut loc_bits: Vec<String> = Vec::new();
    if !intake.address.is_empty() {
        loc_bits.push(intake.address.clone());
    }
    if !intake.city.is_empty() {
        loc_bits.push(intake.city.clone());
    }
    loc_bits.push(format!("{} County", intake.county.name()));
    parts.push(format!("The site is located at {}", loc_bits.join(", ")));

    if !intake.parcel_id.is_empty() {
        parts.push(format!("Parcel ID {}", intake.parcel_id));
    }
    if !intake.land_use.is_empty() {
        parts.push(format!("Current land use is {}", intake.land_use));
    }
    if !intake.site_area_acres.is_empty() {
        parts.push(format!("Site area is {} acres", intake.site_area_acres));
    }
    if !intake.zoning.is_empty() {
        parts.push(format!("Zoning: {}", intake.zoning));
    }
    if !intake.future_land_use.is_empty() {
        parts.push(format!("Future Land Use: {}", intake.future_land_use));
    }

    // With no description and no lookup yet, only the county stub is
    // present — treat that as "nothing to say".
    if desc.is_empty() && intake.address.is_empty() && intake.parcel_id.is_empty() {
        return s!();
    }

    let mut out = parts.join(". ");
    out.push('.');
    out
}

/// Render the full proposal preview.
pub fn render(p: &ProposalState) -> String {
    let mut doc = Document::default();

    // The understanding paragraph already leads with the short
    // description.
    let understanding = understanding_paragraph(p);
    if !understanding.is_empty() {
        doc.section("PROJECT UNDERSTANDING");
        doc.line(&understanding);
    }

    let checked: Vec<&str> = ASSUMPTIONS
        .iter()
        .filter(|a| p.assumption_checked(a.id))
        .map(|a| a.text)
        .collect();
    let assumptions_other = p.project.assumptions_other.trim();
    if !checked.is_empty() || !assumptions_other.is_empty() {
        doc.section("PROJECT ASSUMPTIONS");
        for text in checked {
            doc.bullet(text);
        }
        if !assumptions_other.is_empty() {
            doc.line(assumptions_other);
        }
    }

    let selected_tasks: Vec<_> = SCOPE_TASKS.iter().filter(|t| p.task_selected(t.id)).collect();
    let scope_other = p.scope.scope_other.trim();
    if !selected_tasks.is_empty() || !scope_other.is_empty() {
        doc.section("SCOPE OF SERVICES");
        for t in &selected_tasks {
            doc.heading(t.label);
            doc.line(t.text);
        }
        if !scope_other.is_empty() {
            doc.heading("Additional scope items");
            doc.line(scope_other);
        }
    }

    let selected_permits: Vec<&str> = PERMITS
        .iter()
        .filter(|perm| p.permit_selected(perm.id))
        .map(|perm| perm.label)
        .collect();
    let permit_lines: Vec<&str> = p
        .permits
        .permit_other
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if !selected_permits.is_empty() || !permit_lines.is_empty() {
        doc.section("TASK 107 — PERMITTING");
        for label in selected_permits {
            doc.bullet(label);
        }
        for line in permit_lines {
            doc.bullet(line);
        }
    }

    let selected_ca: Vec<_> = CA_TASKS.iter().filter(|t| p.ca_selected(t.id)).collect();
    if !selected_ca.is_empty() {
        doc.section("TASKS 108–110");
        for t in &selected_ca {
            doc.heading(t.label);
            doc.line(t.text);
        }
    }

    let schedule = fees::schedule(p);
    if !schedule.is_empty() {
        doc.section("FEE SCHEDULE");
        for line in &schedule {
            doc.line(&format!("{} — {}", line.label, format_usd(line.amount)));
        }
        doc.line(&format!("Total — {}", format_usd(fees::total(p))));
    }

    doc.finish()
}

#[derive(Default)]
struct Document {
    out: String,
}

impl Document {
    fn section(&mut self, title: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(title);
        self.out.push('\n');
    }
    fn heading(&mut self, text: &str) {
        self.out.push('\n');
        self.out.push_str(text);
        self.out.push('\n');
    }
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }
    fn bullet(&mut self, text: &str) {
        self.out.push_str("- ");
        self.out.push_str(text);
        self.out.push('\n');
    }
    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_renders_empty() {
        assert_eq!(render(&ProposalState::default()), "");
    }

    #[test]
    fn understanding_paragraph_assembles_tokens() {
        let mut p = ProposalState::default();
        p.project.description_short = s!("Client plans to develop a retail outparcel.");
        p.intake.address = s!("123 MAIN ST N");
        p.intake.city = s!("St. Petersburg");
        p.intake.parcel_id = s!("19-31-17-73166-001-0010");
        p.intake.land_use = s!("Single Family");
        p.intake.site_area_acres = s!("0.24");
        p.intake.zoning = s!("CCS-1");

        let text = understanding_paragraph(&p);
        assert!(text.starts_with("Client plans to develop a retail outparcel. The site is located at 123 MAIN ST N, St. Petersburg, Pinellas County."));
        assert!(text.contains("Parcel ID 19-31-17-73166-001-0010"));
        assert!(text.contains("Current land use is Single Family"));
        assert!(text.contains("Site area is 0.24 acres"));
        assert!(text.contains("Zoning: CCS-1"));
        assert!(text.ends_with('.'));
        assert!(!text.contains(".."));
    }

    #[test]
    fn understanding_paragraph_empty_without_inputs() {
        assert_eq!(understanding_paragraph(&ProposalState::default()), "");
    }

    #[test]
    fn permit_free_text_splits_into_bullets() {
        let mut p = ProposalState::default();
        p.permits.permit_ids.insert(s!("permit_fdep_npdes"), true);
        p.permits.permit_other = s!("Duke Energy vault permit\n\n  County ROW use permit  \n");

        let text = render(&p);
        assert!(text.contains("TASK 107 — PERMITTING"));
        assert!(text.contains("- FDEP NPDES Permit"));
        assert!(text.contains("- Duke Energy vault permit"));
        assert!(text.contains("- County ROW use permit"));
        // blank free-text lines don't produce empty bullets
        assert!(!text.contains("\n- \n"));
    }

    #[test]
    fn fee_schedule_appears_with_selections() {
        let mut p = ProposalState::default();
        p.scope
            .task_ids
            .insert(s!("task_stormwater_design"), true);
        p.ca_tasks.task_ids.insert(s!("task_109_meetings"), true);

        let text = render(&p);
        assert!(text.contains("SCOPE OF SERVICES"));
        assert!(text.contains("Stormwater Design"));
        assert!(text.contains("FEE SCHEDULE"));
        assert!(text.contains("Stormwater Design — $18,500"));
        assert!(text.contains("Task 109 — Meetings — $5,600"));
        assert!(text.contains("Total — $24,100"));
    }

    #[test]
    fn unchecked_sections_are_omitted() {
        let mut p = ProposalState::default();
        p.project.description_short = s!("A project.");
        let text = render(&p);
        assert!(text.contains("PROJECT UNDERSTANDING"));
        assert!(!text.contains("PROJECT ASSUMPTIONS"));
        assert!(!text.contains("SCOPE OF SERVICES"));
        assert!(!text.contains("PERMITTING"));
        assert!(!text.contains("FEE SCHEDULE"));
    }
}
