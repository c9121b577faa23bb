//! Oracle access errors.

use crate::error::{CampaignError, ErrorSeverity};

/// Errors that occur when accessing registry data through [`super::Env`].
///
/// Missing oracles are fatal: the decision cannot present or commit without
/// its registries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// TemplateOracle is not available in the environment.
    #[error("TemplateOracle not available")]
    TemplatesNotAvailable,

    /// EquipmentOracle is not available in the environment.
    #[error("EquipmentOracle not available")]
    EquipmentNotAvailable,

    /// SettlementOracle is not available in the environment.
    #[error("SettlementOracle not available")]
    SettlementsNotAvailable,

    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl CampaignError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            TemplatesNotAvailable => "ORACLE_TEMPLATES_NOT_AVAILABLE",
            EquipmentNotAvailable => "ORACLE_EQUIPMENT_NOT_AVAILABLE",
            SettlementsNotAvailable => "ORACLE_SETTLEMENTS_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
