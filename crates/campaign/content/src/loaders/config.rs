//! Campaign configuration loader.

use std::path::Path;

use campaign_core::CampaignConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for campaign configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CampaignConfig
    ///
    /// # Returns
    ///
    /// Returns a CampaignConfig.
    pub fn load(path: &Path) -> LoadResult<CampaignConfig> {
        let content = read_file(path)?;
        let config: CampaignConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
