//! In-memory registries and host.
//!
//! These hold plain vectors (behind a lock where fixtures need to mutate
//! world data between presentation and confirmation, exactly the race the
//! committer's re-score exists for).

use std::sync::RwLock;

use campaign_core::{
    CharacterId, ClanId, CultureId, EquipmentOracle, EquipmentRoster, LoadoutId, Occupation,
    SettlementId, SettlementOracle, TemplateId, TemplateOracle, WandererTemplate,
};

use crate::host::{CampaignHost, NewCompanion};

/// Template registry over a plain vector.
///
/// `wanderer_pool` applies the filtering contract itself: only wanderer
/// occupation templates of the requested culture are returned, in insertion
/// order.
#[derive(Default)]
pub struct MemoryTemplateRegistry {
    templates: RwLock<Vec<WandererTemplate>>,
}

impl MemoryTemplateRegistry {
    pub fn new(templates: Vec<WandererTemplate>) -> Self {
        Self {
            templates: RwLock::new(templates),
        }
    }

    pub fn push(&self, template: WandererTemplate) {
        self.templates
            .write()
            .expect("registry poisoned")
            .push(template);
    }

    pub fn remove(&self, id: &TemplateId) {
        self.templates
            .write()
            .expect("registry poisoned")
            .retain(|template| template.id() != id);
    }

    pub fn clear(&self) {
        self.templates.write().expect("registry poisoned").clear();
    }
}

impl TemplateOracle for MemoryTemplateRegistry {
    fn wanderer_pool(&self, culture: &CultureId) -> Vec<WandererTemplate> {
        self.templates
            .read()
            .expect("registry poisoned")
            .iter()
            .filter(|template| {
                template.occupation() == Occupation::Wanderer && template.culture() == culture
            })
            .cloned()
            .collect()
    }
}

/// Equipment registry over a plain vector.
#[derive(Default)]
pub struct MemoryEquipmentRegistry {
    rosters: Vec<EquipmentRoster>,
}

impl MemoryEquipmentRegistry {
    pub fn new(rosters: Vec<EquipmentRoster>) -> Self {
        Self { rosters }
    }
}

impl EquipmentOracle for MemoryEquipmentRegistry {
    fn rosters_of(&self, culture: &CultureId) -> Vec<EquipmentRoster> {
        self.rosters
            .iter()
            .filter(|roster| &roster.culture == culture)
            .cloned()
            .collect()
    }
}

/// A settlement entry in the in-memory registry.
#[derive(Clone, Debug)]
pub struct SettlementRecord {
    pub id: SettlementId,
    pub culture: CultureId,
    pub owner: Option<ClanId>,
}

/// Settlement registry over a plain vector.
#[derive(Default)]
pub struct MemorySettlementRegistry {
    settlements: Vec<SettlementRecord>,
}

impl MemorySettlementRegistry {
    pub fn new(settlements: Vec<SettlementRecord>) -> Self {
        Self { settlements }
    }
}

impl SettlementOracle for MemorySettlementRegistry {
    fn of_culture(&self, culture: &CultureId) -> Vec<SettlementId> {
        self.settlements
            .iter()
            .filter(|settlement| &settlement.culture == culture)
            .map(|settlement| settlement.id)
            .collect()
    }

    fn owned_by(&self, clan: ClanId) -> Vec<SettlementId> {
        self.settlements
            .iter()
            .filter(|settlement| settlement.owner == Some(clan))
            .map(|settlement| settlement.id)
            .collect()
    }

    fn all(&self) -> Vec<SettlementId> {
        self.settlements
            .iter()
            .map(|settlement| settlement.id)
            .collect()
    }
}

/// One mutation recorded by [`MemoryHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostMutation {
    Created {
        companion: CharacterId,
        template: TemplateId,
        born: SettlementId,
        age: u32,
    },
    Equipped {
        context: CharacterId,
        loadout: LoadoutId,
    },
    Bound {
        companion: CharacterId,
        clan: ClanId,
    },
}

/// In-memory host that journals every mutation.
///
/// Companion ids are assigned sequentially from `first_id`; names are derived
/// from the template id.
#[derive(Debug)]
pub struct MemoryHost {
    next_id: u32,
    journal: Vec<HostMutation>,
}

impl MemoryHost {
    pub fn new(first_id: u32) -> Self {
        Self {
            next_id: first_id,
            journal: Vec::new(),
        }
    }

    /// Everything this host was asked to do, in order.
    pub fn journal(&self) -> &[HostMutation] {
        &self.journal
    }

    /// Number of companions created so far.
    pub fn created_count(&self) -> usize {
        self.journal
            .iter()
            .filter(|mutation| matches!(mutation, HostMutation::Created { .. }))
            .count()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl CampaignHost for MemoryHost {
    fn create_companion(
        &mut self,
        template: &TemplateId,
        born: SettlementId,
        age: u32,
    ) -> NewCompanion {
        let id = CharacterId(self.next_id);
        self.next_id += 1;
        self.journal.push(HostMutation::Created {
            companion: id,
            template: template.clone(),
            born,
            age,
        });
        NewCompanion {
            id,
            name: format!("{} {}", template.as_str(), id.0),
        }
    }

    fn assign_equipment(&mut self, context: CharacterId, loadout: &LoadoutId) {
        self.journal.push(HostMutation::Equipped {
            context,
            loadout: loadout.clone(),
        });
    }

    fn bind_companion(&mut self, companion: CharacterId, clan: ClanId) {
        self.journal.push(HostMutation::Bound { companion, clan });
    }
}
