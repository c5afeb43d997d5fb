//! Records as they appear in a Lighthouse export. Each file nests its record
//! under a single key (`ticket` or `milestone`), and timestamps carry the
//! project's UTC offset.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Contents of a `tickets/<id>-<slug>/ticket.json` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TicketFile {
    pub ticket: Ticket,
}

/// Contents of a `milestones/<id>-<slug>.json` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MilestoneFile {
    pub milestone: Milestone,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub number: u64,
    pub title: String,
    /// Body text of the newest revision; older bodies only survive as
    /// version entries.
    pub latest_body: String,
    pub creator_name: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub closed: bool,
    pub spam: bool,
    /// Workflow state, free-form in exports (`new`, `open`, `hold`, ...).
    pub state: String,
    pub tag: Option<String>,
    pub milestone_id: Option<u64>,
    #[serde(default)]
    pub assigned_user_name: Option<String>,
    /// Revision history, oldest first; the first entry duplicates the
    /// original submission.
    pub versions: Vec<Version>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Version {
    pub user_name: String,
    pub body: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub goals: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub due_on: Option<DateTime<FixedOffset>>,
    pub open_tickets_count: u64,
}
