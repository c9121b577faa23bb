//! Interactive campaign decisions.
//!
//! A decision is constructed once per invocation, driven to a terminal state
//! through the modal UI, and discarded. Only the recruitment decision exists
//! today; the lifecycle types it shares with hosts live in campaign-core.

mod committer;
mod recruit;

pub use committer::RecruitmentCommitter;
pub use recruit::RecruitCompanionDecision;

use campaign_core::{LoadoutId, RoleId, SettlementId};

use crate::host::NewCompanion;

/// Terminal result of driving a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// A role was confirmed and the world mutation committed.
    Applied(RecruitmentReceipt),
    /// The user dismissed the inquiry; nothing changed.
    Cancelled,
}

/// Record of a committed recruitment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecruitmentReceipt {
    pub role: RoleId,
    pub companion: NewCompanion,
    pub born: SettlementId,
    pub loadout: LoadoutId,
    pub age: u32,
}
