//! World-mutation port into the host campaign.
//!
//! Everything behind this trait is irreversible: once a companion is
//! created there is no rollback, and the follow-up steps (outfitting,
//! binding) are best-effort notifications of a fait accompli. Hosts that can
//! fail internally handle that on their side of the port.

use campaign_core::{CharacterId, ClanId, LoadoutId, SettlementId, TemplateId};

/// Identity handed back by the host after persistent character creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCompanion {
    pub id: CharacterId,
    /// Display name, used in the acknowledgment notice.
    pub name: String,
}

/// Mutating operations the committer performs against the host campaign.
pub trait CampaignHost: Send + Sync {
    /// Instantiate a persistent character from a template, born at the given
    /// settlement with the given age.
    fn create_companion(
        &mut self,
        template: &TemplateId,
        born: SettlementId,
        age: u32,
    ) -> NewCompanion;

    /// Assign an equipment loadout. `context` is the actor funding the
    /// outfitting: the recruiter, not the new companion.
    fn assign_equipment(&mut self, context: CharacterId, loadout: &LoadoutId);

    /// Bind a character to a clan as companion.
    fn bind_companion(&mut self, companion: CharacterId, clan: ClanId);
}
