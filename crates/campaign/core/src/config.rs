/// Campaign configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignConfig {
    /// Age at which characters come of age in the host campaign.
    /// Freshly recruited companions are never younger than this.
    pub coming_of_age: u32,
}

impl CampaignConfig {
    /// Exclusive upper bound of the random offset added on top of
    /// [`coming_of_age`](Self::coming_of_age) when a companion is created.
    pub const RECRUIT_AGE_SPREAD: u32 = 12;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COMING_OF_AGE: u32 = 18;

    pub fn new() -> Self {
        Self {
            coming_of_age: Self::DEFAULT_COMING_OF_AGE,
        }
    }

    pub fn with_coming_of_age(coming_of_age: u32) -> Self {
        Self { coming_of_age }
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self::new()
    }
}
