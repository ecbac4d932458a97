// src/config/state.rs
use std::collections::HashMap;

/// Which tab is showing. Index into gui::router::PAGES.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Intake,
    Understanding,
    Scope,
    Permitting,
    Billing,
}

/// Supported lookup counties. Only Pinellas has a backend wired up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum County {
    #[default]
    Pinellas,
    Hillsborough,
    Pasco,
}

impl County {
    pub const ALL: [County; 3] = [County::Pinellas, County::Hillsborough, County::Pasco];

    pub fn name(&self) -> &'static str {
        match self {
            County::Pinellas => "Pinellas",
            County::Hillsborough => "Hillsborough",
            County::Pasco => "Pasco",
        }
    }

    pub fn parse(s: &str) -> Option<County> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
    }
}

/// Tab 1: property intake. Lookup results land here; zoning and
/// future land use stay manual.
#[derive(Clone, Debug, Default)]
pub struct IntakeState {
    pub county: County,
    pub municipality: String,
    pub jurisdiction_display: String,
    pub parcel_id: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub owner: String,
    pub land_use: String,
    pub site_area_acres: String,
    pub site_area_sqft: String,
    pub zoning: String,
    pub future_land_use: String,
}

/// Tab 1: client/entity tokens.
#[derive(Clone, Debug, Default)]
pub struct ClientState {
    pub client_name: String,
    pub contact_name: String,
    pub entity_name: String,
    pub entity_address: String,
}

/// Tabs 1-2: project tokens, short description, assumptions.
#[derive(Clone, Debug, Default)]
pub struct ProjectState {
    pub project_name: String,
    pub project_location: String,
    pub proposal_date: String,
    pub description_short: String,
    pub assumptions_checked: HashMap<String, bool>,
    pub assumptions_other: String,
}

/// Tab 3: scope-of-services task selections.
#[derive(Clone, Debug, Default)]
pub struct ScopeState {
    pub task_ids: HashMap<String, bool>,
    pub scope_other: String,
}

/// Tab 4: Task 107 permit selections.
#[derive(Clone, Debug, Default)]
pub struct PermitState {
    pub permit_ids: HashMap<String, bool>,
    pub permit_other: String,
}

/// Tab 4: Tasks 108-110 selections.
#[derive(Clone, Debug, Default)]
pub struct CaState {
    pub task_ids: HashMap<String, bool>,
}

/// Tab 5: per-task fee overrides (whole dollars) and the hourly note.
/// An absent key means "use the catalog base fee".
#[derive(Clone, Debug, Default)]
pub struct BillingState {
    pub overrides: HashMap<String, u64>,
    pub hourly_note: String,
}

/// The whole proposal. One per session, owned by the app and passed
/// into each page, never a global.
#[derive(Clone, Debug, Default)]
pub struct ProposalState {
    pub intake: IntakeState,
    pub client: ClientState,
    pub project: ProjectState,
    pub scope: ScopeState,
    pub permits: PermitState,
    pub ca_tasks: CaState,
    pub billing: BillingState,
}

impl ProposalState {
    pub fn assumption_checked(&self, id: &str) -> bool {
        self.project
            .assumptions_checked
            .get(id)
            .copied()
            .unwrap_or(false)
    }

    pub fn task_selected(&self, id: &str) -> bool {
        self.scope.task_ids.get(id).copied().unwrap_or(false)
    }

    pub fn permit_selected(&self, id: &str) -> bool {
        self.permits.permit_ids.get(id).copied().unwrap_or(false)
    }

    pub fn ca_selected(&self, id: &str) -> bool {
        self.ca_tasks.task_ids.get(id).copied().unwrap_or(false)
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Parcel-ID text field. Copied into intake only when a lookup
    /// actually runs.
    pub parcel_input: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            parcel_input: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub proposal: ProposalState,
    pub gui: GuiState,
}
