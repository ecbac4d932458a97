// src/proposal/catalog.rs
//
// Static proposal libraries: assumptions, scope-of-services tasks,
// permits, and the construction-administration tasks. Every entry has
// a stable string id that the checkbox maps key on. Base fees are
// whole dollars; permit agency fees are paid by the client directly,
// so permits carry no fee here.

pub struct Assumption {
    pub id: &'static str,
    pub text: &'static str,
}

pub const ASSUMPTIONS: &[Assumption] = &[
    Assumption {
        id: "assump_one_phase",
        text: "The project will be designed, permitted, and constructed in one phase.",
    },
    Assumption {
        id: "assump_waivers_addsvc",
        text: "If waivers are required, that will be considered an additional service.",
    },
    Assumption {
        id: "assump_water_sewer_cosp",
        text: "Water and Sewer will be served by City of St. Petersburg. It is assumed existing infrastructure is adequate. Lift station not required; can be added if required.",
    },
    Assumption {
        id: "assump_no_offsite",
        text: "Offsite roadway improvements or utility extensions not within the site area will be considered a separate scope.",
    },
    Assumption {
        id: "assump_no_platting",
        text: "It is assumed that platting is not required; platting assistance can be provided as a separate scope.",
    },
    Assumption {
        id: "assump_no_traffic",
        text: "It is assumed that no traffic analysis is required; if needed it can be provided as an additional service.",
    },
    Assumption {
        id: "assump_geotech_by_client",
        text: "A geotechnical report with pavement recommendations, borings, and groundwater information will be provided by Client.",
    },
    Assumption {
        id: "assump_no_wetlands",
        text: "No wetlands are present on the subject site.",
    },
    Assumption {
        id: "assump_no_flood_comp",
        text: "No floodplain compensation is anticipated to be required.",
    },
    Assumption {
        id: "assump_no_protected_species",
        text: "No protected species are anticipated to be present on the subject site.",
    },
];

pub struct ScopeTask {
    pub id: &'static str,
    /// Section tag shown with the letter prefix stripped in the UI.
    pub section: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    /// Base fee in whole dollars
    pub fee: u64,
}

pub const SCOPE_TASKS: &[ScopeTask] = &[
    ScopeTask {
        id: "task_due_diligence_site_review",
        section: "B — Due Diligence",
        label: "Due-Diligence and Site Review",
        text: "Engineer will review readily available property data, zoning and land development regulations, utility availability, and site constraints, and will summarize findings and development considerations in a due-diligence memorandum.",
        fee: 4_500,
    },
    ScopeTask {
        id: "task_city_site_plan_approval",
        section: "C — City approvals",
        label: "City of St. Petersburg Site Plan Approval Process",
        text: "Engineer will prepare and submit the site plan application package, attend pre-application and staff review meetings, and respond to up to two rounds of City review comments through site plan approval.",
        fee: 12_500,
    },
    ScopeTask {
        id: "task_landscape_drc_concept",
        section: "D — Landscape concepts",
        label: "Landscape DRC Concept Plan",
        text: "Engineer will prepare a concept landscape plan suitable for Development Review Commission submittal, including plant palette, buffer treatments, and compliance summary against the applicable landscape code.",
        fee: 6_800,
    },
    ScopeTask {
        id: "task_civil_construction_documents",
        section: "F — Civil design",
        label: "Civil Construction Documents",
        text: "Engineer will prepare civil construction documents including site geometry, grading and drainage, utility plans, erosion control, and construction details, suitable for permitting and construction bidding.",
        fee: 48_000,
    },
    ScopeTask {
        id: "task_fdot_driveway_access",
        section: "Permitting/FDOT",
        label: "FDOT Driveway Access Plans",
        text: "Engineer will prepare driveway connection plans and supporting documentation for the FDOT access connection application, and will coordinate with District staff through issuance of the connection permit.",
        fee: 9_500,
    },
    ScopeTask {
        id: "task_stormwater_design",
        section: "G — Stormwater",
        label: "Stormwater Design",
        text: "Engineer will prepare the stormwater management design, including treatment and attenuation calculations, pond or vault sizing, and the drainage report required for water management district and local review.",
        fee: 18_500,
    },
    ScopeTask {
        id: "task_code_min_landscape",
        section: "H — Landscape",
        label: "Code Minimum Landscape Architecture",
        text: "Engineer's landscape architect will prepare code-minimum landscape and irrigation plans meeting the jurisdiction's land development code, including required buffers, interior green space, and tree mitigation tabulations.",
        fee: 7_200,
    },
    ScopeTask {
        id: "task_106_landscape_architecture",
        section: "H — Landscape",
        label: "Landscape Architecture (Task 106) — Streetscape + Elevated Amenity Deck",
        text: "Engineer's landscape architect will prepare streetscape planting and hardscape plans along the project frontage and planting, soil profile, and drainage coordination plans for the elevated amenity deck, through one concept iteration and final construction documents.",
        fee: 22_000,
    },
    ScopeTask {
        id: "task_platting_assistance",
        section: "N — Platting",
        label: "Platting Assistance",
        text: "Engineer will coordinate with Client's surveyor to prepare and process the plat application, including technical review responses, through plat recording.",
        fee: 8_500,
    },
    ScopeTask {
        id: "task_faa_permitting",
        section: "O — FAA",
        label: "FAA Permitting",
        text: "Engineer will prepare and submit FAA Form 7460-1 determinations for the proposed construction height and crane operations, and will track the applications through FAA determination letters.",
        fee: 3_500,
    },
];

pub struct Permit {
    pub id: &'static str,
    pub label: &'static str,
}

pub const PERMITS: &[Permit] = &[
    Permit {
        id: "permit_cosp_civil",
        label: "City of St. Petersburg Commercial Plan Site Civil Permit",
    },
    Permit {
        id: "permit_cosp_row",
        label: "City of St. Petersburg Right-of-Way Permit – Site Work (no offsite extensions)",
    },
    Permit {
        id: "permit_swfwmd_erp_exemption",
        label: "SWFWMD ERP Exemption",
    },
    Permit {
        id: "permit_fdep_water_sewer_exemption",
        label: "FDEP Water and Sewer Exemption",
    },
    Permit {
        id: "permit_fdep_npdes",
        label: "FDEP NPDES Permit",
    },
];

pub struct CaTask {
    pub id: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    pub fee: u64,
}

pub const CA_TASKS: &[CaTask] = &[
    CaTask {
        id: "task_108_franchised_utility_coordination",
        label: "Task 108 — Franchised Utility Coordination",
        text: "Engineer will coordinate with franchised utility providers (power, communications, gas) for service routing and easement needs, and will incorporate provider requirements into the civil documents.",
        fee: 4_200,
    },
    CaTask {
        id: "task_109_meetings",
        label: "Task 109 — Meetings",
        text: "Engineer will attend design progress meetings, agency coordination meetings, and up to four Owner/Architect/Contractor meetings during construction.",
        fee: 5_600,
    },
    CaTask {
        id: "task_110_construction_phase_services",
        label: "Task 110 — Construction Phase Services",
        text: "Engineer will respond to requests for information, review shop drawings and pay applications for civil scope, perform periodic site observations, and prepare the record drawing certification package required for agency close-out.",
        fee: 15_500,
    },
];

/// Checkbox label for a scope section: the letter prefix is dropped,
/// so "B — Due Diligence" shows as "Due Diligence".
pub fn section_label(section: &str) -> &str {
    let trimmed = section.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return trimmed,
    }
    let rest = chars.as_str().trim_start();
    if let Some(stripped) = rest.strip_prefix(['-', '—']) {
        stripped.trim_start()
    } else {
        trimmed
    }
}

pub fn scope_task(id: &str) -> Option<&'static ScopeTask> {
    SCOPE_TASKS.iter().find(|t| t.id == id)
}

pub fn ca_task(id: &str) -> Option<&'static CaTask> {
    CA_TASKS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_label_strips_letter_prefix() {
        assert_eq!(section_label("B — Due Diligence"), "Due Diligence");
        assert_eq!(section_label("F — Civil design"), "Civil design");
        assert_eq!(section_label("Permitting/FDOT"), "Permitting/FDOT");
        assert_eq!(section_label("H - Landscape"), "Landscape");
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = SCOPE_TASKS
            .iter()
            .map(|t| t.id)
            .chain(CA_TASKS.iter().map(|t| t.id))
            .chain(PERMITS.iter().map(|p| p.id))
            .chain(ASSUMPTIONS.iter().map(|a| a.id))
            .collect();
        let n = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }
}
