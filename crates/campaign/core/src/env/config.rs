//! Campaign configuration oracle interface.

use crate::config::CampaignConfig;

/// Provides campaign-level tuning values owned by the host.
pub trait ConfigOracle: Send + Sync {
    /// Age at which characters come of age.
    fn coming_of_age(&self) -> u32;
}

impl ConfigOracle for CampaignConfig {
    fn coming_of_age(&self) -> u32 {
        self.coming_of_age
    }
}
