//! Traits describing read-only world data.
//!
//! Oracles expose the registries the recruitment decision reads: candidate
//! templates, equipment rosters, settlements, campaign tuning and the host's
//! deterministic RNG. The [`Env`] aggregate bundles them so the workflow can
//! access everything it needs without hard coupling to concrete
//! implementations.

mod config;
mod equipment;
mod error;
mod rng;
mod settlements;
mod templates;

pub use config::ConfigOracle;
pub use equipment::{EquipmentOracle, EquipmentRoster, RosterFlags};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed, pick_uniform, pick_weighted};
pub use settlements::SettlementOracle;
pub use templates::{
    Occupation, SKILL_CAP, TemplateOracle, WandererTemplate, WandererTemplateBuilder,
};

/// Aggregates the read-only oracles required by presentation and commit.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, T, E, S, C, R>
where
    T: TemplateOracle + ?Sized,
    E: EquipmentOracle + ?Sized,
    S: SettlementOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    templates: Option<&'a T>,
    equipment: Option<&'a E>,
    settlements: Option<&'a S>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type CampaignEnv<'a> = Env<
    'a,
    dyn TemplateOracle + 'a,
    dyn EquipmentOracle + 'a,
    dyn SettlementOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, T, E, S, C, R> Env<'a, T, E, S, C, R>
where
    T: TemplateOracle + ?Sized,
    E: EquipmentOracle + ?Sized,
    S: SettlementOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        templates: Option<&'a T>,
        equipment: Option<&'a E>,
        settlements: Option<&'a S>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            templates,
            equipment,
            settlements,
            config,
            rng,
        }
    }

    pub fn with_all(
        templates: &'a T,
        equipment: &'a E,
        settlements: &'a S,
        config: &'a C,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(templates),
            Some(equipment),
            Some(settlements),
            Some(config),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            templates: None,
            equipment: None,
            settlements: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the TemplateOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TemplatesNotAvailable` if no template oracle was provided.
    pub fn templates(&self) -> Result<&'a T, OracleError> {
        self.templates.ok_or(OracleError::TemplatesNotAvailable)
    }

    /// Returns the EquipmentOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EquipmentNotAvailable` if no equipment oracle was provided.
    pub fn equipment(&self) -> Result<&'a E, OracleError> {
        self.equipment.ok_or(OracleError::EquipmentNotAvailable)
    }

    /// Returns the SettlementOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SettlementsNotAvailable` if no settlement oracle was provided.
    pub fn settlements(&self) -> Result<&'a S, OracleError> {
        self.settlements
            .ok_or(OracleError::SettlementsNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, T, E, S, C, R> Env<'a, T, E, S, C, R>
where
    T: TemplateOracle + 'a,
    E: EquipmentOracle + 'a,
    S: SettlementOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `CampaignEnv` (consumes self).
    pub fn into_campaign_env(self) -> CampaignEnv<'a> {
        let templates: Option<&'a dyn TemplateOracle> = self.templates.map(|templates| templates as _);
        let equipment: Option<&'a dyn EquipmentOracle> = self.equipment.map(|equipment| equipment as _);
        let settlements: Option<&'a dyn SettlementOracle> =
            self.settlements.map(|settlements| settlements as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(templates, equipment, settlements, config, rng)
    }

    /// Converts this environment into a trait-object based `CampaignEnv` (borrows self).
    ///
    /// Use this when you need to convert multiple times.
    pub fn as_campaign_env(&self) -> CampaignEnv<'a> {
        let templates: Option<&'a dyn TemplateOracle> = self.templates.map(|templates| templates as _);
        let equipment: Option<&'a dyn EquipmentOracle> = self.equipment.map(|equipment| equipment as _);
        let settlements: Option<&'a dyn SettlementOracle> =
            self.settlements.map(|settlements| settlements as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(templates, equipment, settlements, config, rng)
    }
}
