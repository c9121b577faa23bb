//! Recruitable role definitions.
//!
//! A role is a companion archetype with resource costs and scoring criteria.
//! Roles are static content: constructed once at catalog initialization and
//! never mutated afterwards.

use crate::types::{PerkId, RoleId, SkillId, TraitId};

/// A recruitable companion archetype.
///
/// Costs gate presentation (see the affordability gate); the trait, perk and
/// skill criteria feed candidate scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Role {
    pub id: RoleId,
    /// Display name shown as the option label.
    pub name: String,
    /// Display description shown as the option hint when nothing blocks the role.
    pub description: String,
    pub gold_cost: u32,
    pub influence_cost: u32,
    /// Desired personality traits; candidate levels >= 1 contribute their level.
    pub traits: Vec<TraitId>,
    /// Desired perks; presence contributes 1 each.
    pub perks: Vec<PerkId>,
    /// Desired skills; values >= 50 contribute value / 10 each.
    pub skills: Vec<SkillId>,
}

impl Role {
    /// Creates a builder for constructing a role.
    pub fn builder(id: impl Into<RoleId>) -> RoleBuilder {
        RoleBuilder::new(id)
    }
}

/// Builder for constructing roles.
pub struct RoleBuilder {
    id: RoleId,
    name: Option<String>,
    description: String,
    gold_cost: u32,
    influence_cost: u32,
    traits: Vec<TraitId>,
    perks: Vec<PerkId>,
    skills: Vec<SkillId>,
}

impl RoleBuilder {
    fn new(id: impl Into<RoleId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: String::new(),
            gold_cost: 0,
            influence_cost: 0,
            traits: Vec::new(),
            perks: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Sets the display name. Defaults to the role id when unset.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the display description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets both resource costs.
    pub fn costs(mut self, gold: u32, influence: u32) -> Self {
        self.gold_cost = gold;
        self.influence_cost = influence;
        self
    }

    /// Adds a desired personality trait.
    pub fn require_trait(mut self, trait_id: impl Into<TraitId>) -> Self {
        self.traits.push(trait_id.into());
        self
    }

    /// Adds a desired perk.
    pub fn require_perk(mut self, perk: impl Into<PerkId>) -> Self {
        self.perks.push(perk.into());
        self
    }

    /// Adds a desired skill.
    pub fn require_skill(mut self, skill: impl Into<SkillId>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Builds the role.
    pub fn build(self) -> Role {
        let name = self.name.unwrap_or_else(|| self.id.as_str().to_owned());
        Role {
            id: self.id,
            name,
            description: self.description,
            gold_cost: self.gold_cost,
            influence_cost: self.influence_cost,
            traits: self.traits,
            perks: self.perks,
            skills: self.skills,
        }
    }
}
