//! Candidate scoring against role criteria.
//!
//! Given a pool of wanderer templates and a role, the scorer accumulates a
//! fitness weight per candidate and picks the best survivor:
//!
//! - each desired trait at level >= 1 contributes its level;
//! - each desired perk present contributes 1;
//! - each desired skill at value >= 50 contributes `value / 10`.
//!
//! Candidates with weight <= 1 are discarded. The cutoff is a noise filter:
//! a single trait point of affinity is not enough to qualify.
//!
//! # Determinism
//!
//! Scoring is pure. Ties are broken by pool iteration order (first
//! encountered wins), so a fixed pool ordering always yields the same pick.

use crate::env::WandererTemplate;
use crate::role::Role;

/// Minimum weight a candidate must strictly exceed to qualify.
pub const QUALIFYING_WEIGHT: f32 = 1.0;

/// Skill values below this contribute nothing to the weight.
const SKILL_FLOOR: u32 = 50;

/// A candidate paired with its fitness weight for one role.
///
/// Created transiently per scoring pass and discarded after selection.
#[derive(Clone, Copy, Debug)]
pub struct ScoredCandidate<'a> {
    pub template: &'a WandererTemplate,
    pub weight: f32,
}

/// Ranks candidate pools against role criteria.
pub struct CandidateScorer;

impl CandidateScorer {
    /// Accumulates the fitness weight of a single template for a role.
    pub fn weigh(template: &WandererTemplate, role: &Role) -> f32 {
        let mut weight = 0.0f32;

        for trait_id in &role.traits {
            let level = template.trait_level(trait_id);
            if level >= 1 {
                weight += level as f32;
            }
        }

        for perk in &role.perks {
            if template.has_perk(perk) {
                weight += 1.0;
            }
        }

        for skill in &role.skills {
            let value = template.skill_value(skill);
            if value >= SKILL_FLOOR {
                weight += (value / 10) as f32;
            }
        }

        weight
    }

    /// Selects the best qualifying candidate from the pool.
    ///
    /// Returns `None` when the pool is empty or no candidate clears
    /// [`QUALIFYING_WEIGHT`]. On equal weights the candidate appearing
    /// earlier in the pool wins.
    pub fn best<'a>(pool: &'a [WandererTemplate], role: &Role) -> Option<ScoredCandidate<'a>> {
        let mut best: Option<ScoredCandidate<'a>> = None;

        for template in pool {
            let weight = Self::weigh(template, role);
            if weight <= QUALIFYING_WEIGHT {
                continue;
            }

            match &best {
                Some(current) if weight <= current.weight => {}
                _ => best = Some(ScoredCandidate { template, weight }),
            }
        }

        best
    }
}
