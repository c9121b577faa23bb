//! Shared decision state machine types.
//!
//! The runtime workflow drives these; they live here so hosts and tests can
//! reason about decision lifecycles without pulling in the async layer.

/// Lifecycle of a single recruitment decision.
///
/// Legal transitions:
/// `Created -> Presented -> Confirmed -> Applied` (terminal), or
/// `Created -> Presented -> Cancelled` (terminal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DecisionState {
    /// Constructed, not yet shown.
    Created,
    /// Handed to the modal UI; awaiting confirm or cancel.
    Presented,
    /// A role was confirmed; commit in progress.
    Confirmed,
    /// World mutation committed.
    Applied,
    /// Dismissed without effect.
    Cancelled,
}

impl DecisionState {
    /// True once the decision can no longer be driven.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Applied | Self::Cancelled)
    }
}

/// How a decision is being resolved.
///
/// Only the interactive path exists; callers branch on the mode and the
/// automated path fails loudly rather than silently defaulting.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DecisionMode {
    /// Resolution through the modal UI.
    Interactive,
    /// Non-interactive resolution; intentionally unimplemented.
    Automated,
}
