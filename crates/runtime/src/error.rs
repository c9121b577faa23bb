//! Decision errors.
//!
//! User-visible failures (unaffordable roles, empty candidate pools) are
//! modeled as disabled options with hints, never as errors. The variants
//! here are for the host: broken invariants, exhausted registries and the
//! intentionally missing automated path.

use campaign_core::{CampaignError, CultureId, DecisionState, ErrorSeverity, OracleError, RoleId};

/// Errors surfaced while driving a recruitment decision.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    /// The automated resolution path is intentionally unimplemented.
    ///
    /// Must never be swallowed: callers branch on the decision mode and only
    /// the interactive path exists.
    #[error("decision '{decision}' has no automated resolution path")]
    NotImplemented { decision: &'static str },

    /// Re-scoring at commit time found no qualifying candidate.
    ///
    /// Defensive: presentation disables roles without candidates, so this
    /// only fires when the pool changed across the confirmation suspension.
    #[error("no qualifying candidate for role '{0}'")]
    NoCandidateAvailable(RoleId),

    /// An equipment or settlement fallback chain came up empty.
    #[error("{resource} resolution exhausted for culture '{culture}'")]
    ResolutionExhausted {
        resource: &'static str,
        culture: CultureId,
    },

    /// The decision was driven from a state that does not allow it.
    #[error("decision cannot be driven from state '{0}'")]
    InvalidState(DecisionState),

    /// The UI confirmed a role id that is not in this decision's catalog.
    #[error("role '{0}' is not part of this decision's catalog")]
    UnknownRole(RoleId),

    /// The UI confirmed without a selection despite a required count of 1.
    #[error("confirmation did not include a selection")]
    MissingSelection,

    /// A required registry was unavailable.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CampaignError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        use DecisionError::*;
        match self {
            NotImplemented { .. } | ResolutionExhausted { .. } => ErrorSeverity::Fatal,
            NoCandidateAvailable(_) => ErrorSeverity::Internal,
            InvalidState(_) | UnknownRole(_) | MissingSelection => ErrorSeverity::Validation,
            Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use DecisionError::*;
        match self {
            NotImplemented { .. } => "DECISION_NOT_IMPLEMENTED",
            NoCandidateAvailable(_) => "DECISION_NO_CANDIDATE_AVAILABLE",
            ResolutionExhausted { .. } => "DECISION_RESOLUTION_EXHAUSTED",
            InvalidState(_) => "DECISION_INVALID_STATE",
            UnknownRole(_) => "DECISION_UNKNOWN_ROLE",
            MissingSelection => "DECISION_MISSING_SELECTION",
            Oracle(inner) => inner.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_match_the_taxonomy() {
        let not_implemented = DecisionError::NotImplemented {
            decision: "recruit_companion",
        };
        assert_eq!(not_implemented.severity(), ErrorSeverity::Fatal);

        let no_candidate = DecisionError::NoCandidateAvailable(RoleId::from("thief"));
        assert_eq!(no_candidate.severity(), ErrorSeverity::Internal);

        let exhausted = DecisionError::ResolutionExhausted {
            resource: "equipment roster",
            culture: CultureId::from("highlands"),
        };
        assert_eq!(exhausted.severity(), ErrorSeverity::Fatal);

        let oracle: DecisionError = OracleError::RngNotAvailable.into();
        assert_eq!(oracle.severity(), ErrorSeverity::Fatal);
        assert_eq!(oracle.error_code(), "ORACLE_RNG_NOT_AVAILABLE");
    }
}
