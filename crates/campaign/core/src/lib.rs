//! Deterministic recruitment logic and data types shared across the campaign host.
//!
//! `campaign-core` defines the canonical rules of companion recruitment
//! (role model, candidate scoring, affordability gating, decision lifecycle)
//! and the oracle traits describing the world data those rules read. All of
//! it is pure and synchronous; orchestration against the host UI lives in
//! the runtime crate.

pub mod afford;
pub mod config;
pub mod decision;
pub mod env;
pub mod error;
pub mod role;
pub mod scoring;
pub mod text;
pub mod types;

pub use afford::AffordabilityGate;
pub use config::CampaignConfig;
pub use decision::{DecisionMode, DecisionState};
pub use env::{
    CampaignEnv, ConfigOracle, Env, EquipmentOracle, EquipmentRoster, Occupation, OracleError,
    PcgRng, RngOracle, RosterFlags, SKILL_CAP, SettlementOracle, TemplateOracle, WandererTemplate,
    WandererTemplateBuilder, compute_seed, pick_uniform, pick_weighted,
};
pub use error::{CampaignError, ErrorSeverity};
pub use role::{Role, RoleBuilder};
pub use scoring::{CandidateScorer, QUALIFYING_WEIGHT, ScoredCandidate};
pub use text::TextTemplate;
pub use types::{
    CharacterId, ClanId, CultureId, LoadoutId, PerkId, Recruiter, RoleId, RosterId, SettlementId,
    SkillId, TemplateId, TraitId,
};
