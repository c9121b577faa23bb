//! Candidate template definitions and registry interface.
//!
//! `WandererTemplate` is the read-only view of an unassigned template
//! character this module ranks during recruitment. Templates are owned by the
//! host's registry; this crate only reads trait levels, perk presence and
//! skill values through the accessors below.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{CultureId, PerkId, SkillId, TemplateId, TraitId};

/// Occupation tag on a template character.
///
/// The recruitment pool only ever contains [`Occupation::Wanderer`] entries;
/// the other variants exist so registries can hold mixed template sets and
/// filter on this module's behalf.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Occupation {
    /// Unnamed drifter eligible for promotion to a named companion.
    #[default]
    Wanderer,
    /// Settlement notable; never recruitable.
    Notable,
    /// Traveling merchant.
    Merchant,
    /// Craftsperson bound to a settlement.
    Artisan,
}

/// Upper bound of the skill value scale.
pub const SKILL_CAP: u32 = 300;

/// Read-only template character record.
///
/// Trait levels may be negative; absent traits read as 0. Skill values are
/// clamped to `0..=SKILL_CAP` at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WandererTemplate {
    id: TemplateId,
    culture: CultureId,
    occupation: Occupation,
    traits: BTreeMap<TraitId, i32>,
    perks: BTreeSet<PerkId>,
    skills: BTreeMap<SkillId, u32>,
}

impl WandererTemplate {
    /// Creates a builder for constructing a template.
    pub fn builder(id: impl Into<TemplateId>, culture: impl Into<CultureId>) -> WandererTemplateBuilder {
        WandererTemplateBuilder::new(id, culture)
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn culture(&self) -> &CultureId {
        &self.culture
    }

    pub fn occupation(&self) -> Occupation {
        self.occupation
    }

    /// Level of a personality trait; 0 when the template doesn't carry it.
    pub fn trait_level(&self, trait_id: &TraitId) -> i32 {
        self.traits.get(trait_id).copied().unwrap_or(0)
    }

    pub fn has_perk(&self, perk: &PerkId) -> bool {
        self.perks.contains(perk)
    }

    /// Skill value on the 0..=SKILL_CAP scale; 0 when untrained.
    pub fn skill_value(&self, skill: &SkillId) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }
}

/// Builder for constructing template characters.
pub struct WandererTemplateBuilder {
    id: TemplateId,
    culture: CultureId,
    occupation: Occupation,
    traits: BTreeMap<TraitId, i32>,
    perks: BTreeSet<PerkId>,
    skills: BTreeMap<SkillId, u32>,
}

impl WandererTemplateBuilder {
    fn new(id: impl Into<TemplateId>, culture: impl Into<CultureId>) -> Self {
        Self {
            id: id.into(),
            culture: culture.into(),
            occupation: Occupation::default(),
            traits: BTreeMap::new(),
            perks: BTreeSet::new(),
            skills: BTreeMap::new(),
        }
    }

    /// Sets the occupation tag. Defaults to [`Occupation::Wanderer`].
    pub fn occupation(mut self, occupation: Occupation) -> Self {
        self.occupation = occupation;
        self
    }

    /// Sets a trait level (may be negative).
    pub fn trait_level(mut self, trait_id: impl Into<TraitId>, level: i32) -> Self {
        self.traits.insert(trait_id.into(), level);
        self
    }

    /// Marks a perk as present.
    pub fn perk(mut self, perk: impl Into<PerkId>) -> Self {
        self.perks.insert(perk.into());
        self
    }

    /// Sets a skill value, clamped to the skill scale.
    pub fn skill(mut self, skill: impl Into<SkillId>, value: u32) -> Self {
        self.skills.insert(skill.into(), value.min(SKILL_CAP));
        self
    }

    /// Builds the template.
    pub fn build(self) -> WandererTemplate {
        WandererTemplate {
            id: self.id,
            culture: self.culture,
            occupation: self.occupation,
            traits: self.traits,
            perks: self.perks,
            skills: self.skills,
        }
    }
}

/// Registry interface providing candidate templates for recruitment.
///
/// Implementations filter on this module's behalf: the returned pool contains
/// only generic wanderer templates of the requested culture. Pool ordering is
/// meaningful: scoring breaks weight ties by first occurrence.
pub trait TemplateOracle: Send + Sync {
    /// Templates eligible for companion promotion for the given culture.
    fn wanderer_pool(&self, culture: &CultureId) -> Vec<WandererTemplate>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_traits_and_skills_read_as_zero() {
        let template = WandererTemplate::builder("drifter", "highlands").build();
        assert_eq!(template.trait_level(&TraitId::from("commander")), 0);
        assert_eq!(template.skill_value(&SkillId::from("tactics")), 0);
        assert!(!template.has_perk(&PerkId::from("forager")));
    }

    #[test]
    fn skill_values_clamp_to_the_scale() {
        let template = WandererTemplate::builder("drifter", "highlands")
            .skill("bow", 9999)
            .build();
        assert_eq!(template.skill_value(&SkillId::from("bow")), SKILL_CAP);
    }

    #[test]
    fn occupation_parses_from_snake_case() {
        assert_eq!("wanderer".parse::<Occupation>().unwrap(), Occupation::Wanderer);
        assert_eq!(Occupation::Notable.to_string(), "notable");
    }
}
