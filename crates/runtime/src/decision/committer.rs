//! Recruitment commit: the irreversible tail of a confirmed decision.

use campaign_core::{
    CampaignEnv, CandidateScorer, CampaignConfig, EquipmentRoster, LoadoutId, Recruiter,
    RngOracle, Role, RosterFlags, SettlementId, TextTemplate, compute_seed, pick_uniform,
    pick_weighted,
};

use crate::decision::RecruitmentReceipt;
use crate::error::DecisionError;
use crate::host::CampaignHost;
use crate::ui::{InquiryPort, Notice};

// Per-draw seed contexts; one attempt makes four independent draws.
const SEED_ROSTER: u32 = 0;
const SEED_LOADOUT: u32 = 1;
const SEED_SETTLEMENT: u32 = 2;
const SEED_AGE: u32 = 3;

/// Commits a confirmed role choice against the host campaign.
pub struct RecruitmentCommitter;

impl RecruitmentCommitter {
    /// Resolve the best candidate, outfit and bind a new companion.
    ///
    /// The candidate pool is re-queried here rather than carried over from
    /// presentation: world state may have changed while the inquiry was open,
    /// and the commit must rank whatever exists now.
    ///
    /// There is no rollback once the companion is created; outfitting,
    /// binding and the acknowledgment notice are best-effort follow-ups.
    pub async fn apply(
        recruiter: &Recruiter,
        role: &Role,
        env: &CampaignEnv<'_>,
        host: &mut dyn CampaignHost,
        ui: &dyn InquiryPort,
        seed: u64,
    ) -> Result<RecruitmentReceipt, DecisionError> {
        let pool = env.templates()?.wanderer_pool(&recruiter.culture);
        let best = CandidateScorer::best(&pool, role)
            .ok_or_else(|| DecisionError::NoCandidateAvailable(role.id.clone()))?;
        tracing::debug!(
            template = %best.template.id(),
            weight = best.weight,
            role = %role.id,
            "re-scored best candidate"
        );

        let loadout = Self::resolve_loadout(recruiter, env, seed)?;
        let born = Self::resolve_birth_settlement(recruiter, env, seed)?;

        let age_seed = compute_seed(seed, recruiter.id.0, SEED_AGE);
        let age = env.config()?.coming_of_age()
            + env
                .rng()?
                .range(age_seed, 0, CampaignConfig::RECRUIT_AGE_SPREAD - 1);

        let companion = host.create_companion(best.template.id(), born, age);
        // The recruiter funds the outfitting; the context is deliberately
        // not the new companion.
        host.assign_equipment(recruiter.id, &loadout);
        host.bind_companion(companion.id, recruiter.clan);

        tracing::info!(
            companion = %companion.id,
            role = %role.id,
            born = %born,
            age,
            "companion recruited"
        );

        let body = TextTemplate::new(
            "str_companion_found",
            "{COMPANION} was discovered and joined you as companion.",
        )
        .with_var("COMPANION", &companion.name);
        ui.acknowledge(Notice {
            title: TextTemplate::new("str_companion_recruitment", "Companion Recruitment"),
            body,
            button_label: TextTemplate::new("str_accept", "Accept"),
        })
        .await;

        Ok(RecruitmentReceipt {
            role: role.id.clone(),
            companion,
            born,
            loadout,
            age,
        })
    }

    /// Weighted roster draw, companion-tagged first, medium-tier fallback,
    /// then a uniform loadout draw within the winning roster.
    fn resolve_loadout(
        recruiter: &Recruiter,
        env: &CampaignEnv<'_>,
        seed: u64,
    ) -> Result<LoadoutId, DecisionError> {
        let rosters = env.equipment()?.rosters_of(&recruiter.culture);
        let rng = env.rng()?;

        let roster_seed = compute_seed(seed, recruiter.id.0, SEED_ROSTER);
        let roster = Self::pick_flagged(&rosters, RosterFlags::COMPANION, rng, roster_seed)
            .or_else(|| Self::pick_flagged(&rosters, RosterFlags::MEDIUM, rng, roster_seed))
            .ok_or_else(|| DecisionError::ResolutionExhausted {
                resource: "equipment roster",
                culture: recruiter.culture.clone(),
            })?;

        let loadout_seed = compute_seed(seed, recruiter.id.0, SEED_LOADOUT);
        let index = pick_uniform(rng, loadout_seed, roster.loadouts.len()).ok_or_else(|| {
            DecisionError::ResolutionExhausted {
                resource: "equipment loadout",
                culture: recruiter.culture.clone(),
            }
        })?;

        Ok(roster.loadouts[index].clone())
    }

    fn pick_flagged<'a>(
        rosters: &'a [EquipmentRoster],
        flags: RosterFlags,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Option<&'a EquipmentRoster> {
        let matching: Vec<&EquipmentRoster> = rosters
            .iter()
            .filter(|roster| roster.flags.contains(flags))
            .collect();
        let weights: Vec<u32> = matching.iter().map(|roster| roster.weight).collect();
        pick_weighted(rng, seed, &weights).map(|index| matching[index])
    }

    /// Three-tier birth settlement fallback, in fixed order: recruiter
    /// culture, then clan-owned, then any settlement at all.
    fn resolve_birth_settlement(
        recruiter: &Recruiter,
        env: &CampaignEnv<'_>,
        seed: u64,
    ) -> Result<SettlementId, DecisionError> {
        let settlements = env.settlements()?;
        let rng = env.rng()?;
        let settlement_seed = compute_seed(seed, recruiter.id.0, SEED_SETTLEMENT);

        let culture_matched = settlements.of_culture(&recruiter.culture);
        if let Some(index) = pick_uniform(rng, settlement_seed, culture_matched.len()) {
            return Ok(culture_matched[index]);
        }

        let clan_owned = settlements.owned_by(recruiter.clan);
        if let Some(index) = pick_uniform(rng, settlement_seed, clan_owned.len()) {
            return Ok(clan_owned[index]);
        }

        let all = settlements.all();
        let index = pick_uniform(rng, settlement_seed, all.len()).ok_or_else(|| {
            DecisionError::ResolutionExhausted {
                resource: "birth settlement",
                culture: recruiter.culture.clone(),
            }
        })?;
        Ok(all[index])
    }
}
