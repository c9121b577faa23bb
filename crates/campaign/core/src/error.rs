//! Common error infrastructure for campaign-core.
//!
//! Domain-specific errors (oracle access, decision failures) live in their
//! own modules; this module provides the shared severity classification and
//! the trait all of them implement.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on retry
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors for the current attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the current attempt cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all campaign errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CampaignError: std::fmt::Display + std::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
