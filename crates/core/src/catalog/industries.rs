//! Industry and agent-type catalogs.
//!
//! The agent types offered on the agent-type step depend on the selected
//! industry: the "Hotel AI" industry gets its own list, every other industry
//! shares the default list.

use aw_protocol::AgentTypeSet;

/// A selectable industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
}

/// Display name of the industry that switches to the hotel agent types.
pub const HOTEL_AI: &str = "Hotel AI";

/// All industries, in display order.
pub const INDUSTRIES: &[Industry] = &[
    Industry { id: "1", name: "General Business" },
    Industry { id: "2", name: "Healthcare" },
    Industry { id: "3", name: "Real Estate" },
    Industry { id: "4", name: "Restaurant" },
    Industry { id: "5", name: HOTEL_AI },
    Industry { id: "6", name: "Legal Services" },
    Industry { id: "7", name: "Financial Services" },
];

/// An entry of an agent-type option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTypeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Agent type selected whenever the default list is (re)offered.
pub const DEFAULT_AGENT_TYPE_ID: &str = "receptionist";

pub const DEFAULT_AGENT_TYPES: &[AgentTypeOption] = &[
    AgentTypeOption {
        id: DEFAULT_AGENT_TYPE_ID,
        name: "Virtual Receptionist",
        description: "Handle calls, appointments, and basic inquiries",
    },
    AgentTypeOption {
        id: "sales",
        name: "Sales/Marketing",
        description: "Lead qualification and sales support",
    },
    AgentTypeOption {
        id: "service",
        name: "Customer Service",
        description: "Help desk and technical assistance",
    },
    AgentTypeOption {
        id: "scheduling",
        name: "Meeting/Appointment Scheduler",
        description: "Schedule and manage appointments",
    },
];

pub const HOTEL_AGENT_TYPES: &[AgentTypeOption] = &[
    AgentTypeOption {
        id: "a1e2c3d4-5678-4f90-abcd-111122223333",
        name: "Front Desk",
        description: "Check-ins, check-outs and guest questions",
    },
    AgentTypeOption {
        id: "b2f3d4e5-6789-4abc-bcde-222233334444",
        name: "Housekeeping",
        description: "Room service and cleaning requests",
    },
    AgentTypeOption {
        id: "c4e5f6a7-7890-4def-bacd-333344445555",
        name: "Reservations",
        description: "Bookings, changes and cancellations",
    },
    AgentTypeOption {
        id: "d5f6a7b8-8901-4f01-bcde-444455556666",
        name: "Concierge",
        description: "Local recommendations and guest services",
    },
];

/// Look up an industry by id.
pub fn find_industry(id: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.id == id)
}

/// The option list offered for `set`.
pub fn agent_types(set: AgentTypeSet) -> &'static [AgentTypeOption] {
    match set {
        AgentTypeSet::Default => DEFAULT_AGENT_TYPES,
        AgentTypeSet::Hotel => HOTEL_AGENT_TYPES,
    }
}

/// Look up an agent type by id across both lists.
pub fn find_agent_type(id: &str) -> Option<&'static AgentTypeOption> {
    DEFAULT_AGENT_TYPES
        .iter()
        .chain(HOTEL_AGENT_TYPES)
        .find(|t| t.id == id)
}
