//! End-to-end decision flow: presentation gating, confirm/cancel handling,
//! and the intentionally missing automated path.

use std::sync::Arc;

use async_trait::async_trait;
use campaign_content::RoleCatalog;
use campaign_core::{
    CampaignConfig, CharacterId, ClanId, CultureId, DecisionMode, DecisionState, Env, PcgRng,
    Recruiter, RoleId, WandererTemplate,
};
use campaign_runtime::{
    DecisionError, DecisionOutcome, HostMutation, InquiryOutcome, InquiryPort,
    MemoryEquipmentRegistry, MemoryHost, MemorySettlementRegistry, MemoryTemplateRegistry, Notice,
    RecruitCompanionDecision, ScriptedInquiryPort, SelectionInquiry, SettlementRecord,
};
use campaign_core::{EquipmentRoster, LoadoutId, RosterFlags, RosterId, SettlementId};

const CULTURE: &str = "highlands";

fn recruiter(gold: u32, influence: Option<u32>) -> Recruiter {
    Recruiter {
        id: CharacterId(1),
        gold,
        influence,
        clan: ClanId(10),
        culture: CultureId::from(CULTURE),
    }
}

fn commander_candidate() -> WandererTemplate {
    WandererTemplate::builder("stern_drifter", CULTURE)
        .trait_level("commander", 3)
        .build()
}

fn default_rosters() -> MemoryEquipmentRegistry {
    MemoryEquipmentRegistry::new(vec![EquipmentRoster {
        id: RosterId::from("companion_kit"),
        culture: CultureId::from(CULTURE),
        flags: RosterFlags::COMPANION,
        weight: 1,
        loadouts: vec![LoadoutId::from("companion_kit_a")],
    }])
}

fn default_settlements() -> MemorySettlementRegistry {
    MemorySettlementRegistry::new(vec![SettlementRecord {
        id: SettlementId(1),
        culture: CultureId::from(CULTURE),
        owner: None,
    }])
}

#[tokio::test]
async fn presentation_gates_roles_by_affordability_and_candidates() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::cancelling();
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap();

    let inquiry = ui.last_inquiry().unwrap();
    assert_eq!(inquiry.required, 1);
    assert_eq!(inquiry.options.len(), 5);

    let ids: Vec<&str> = inquiry.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["commander", "thief", "surgeon", "caravaneer", "warrior"]
    );

    // Only the commander has a qualifying candidate in the pool.
    let commander = &inquiry.options[0];
    assert!(commander.enabled);
    assert_eq!(commander.hint.key(), "");
    assert_eq!(
        commander.hint.fallback(),
        "A companion that meets the criteria for a Commander."
    );

    for option in &inquiry.options[1..] {
        assert!(!option.enabled);
        assert_eq!(option.hint.key(), "str_no_candidate_available");
    }
}

#[tokio::test]
async fn unaffordable_role_hint_uses_the_fulfillment_reason() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::cancelling();
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    // Scenario: gold one short of the cost, no clan influence at all.
    let broke = recruiter(4999, None);
    assert_eq!(decision.fulfillment(&broke).len(), 1);

    decision
        .drive(DecisionMode::Interactive, &broke, &env, &ui, &mut host, 7)
        .await
        .unwrap();

    let inquiry = ui.last_inquiry().unwrap();
    let commander = &inquiry.options[0];
    assert!(!commander.enabled);
    assert_eq!(commander.hint.key(), "str_cannot_afford_companion");
}

#[tokio::test]
async fn missing_candidate_hint_beats_affordability() {
    // Empty pool AND empty purse: the candidate hint must win.
    let templates = MemoryTemplateRegistry::default();
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::cancelling();
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(0, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap();

    for option in &ui.last_inquiry().unwrap().options {
        assert!(!option.enabled);
        assert_eq!(option.hint.key(), "str_no_candidate_available");
    }
}

#[tokio::test]
async fn confirming_commits_exactly_once_and_notifies() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::confirming("commander");
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    let outcome = decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap();

    let DecisionOutcome::Applied(receipt) = outcome else {
        panic!("expected applied outcome");
    };
    assert_eq!(receipt.role, RoleId::from("commander"));
    assert_eq!(decision.state(), DecisionState::Applied);

    // Create, outfit, bind - once each, in that order.
    let journal = host.journal();
    assert_eq!(journal.len(), 3);
    assert!(matches!(journal[0], HostMutation::Created { .. }));
    assert!(matches!(journal[1], HostMutation::Equipped { .. }));
    assert!(matches!(journal[2], HostMutation::Bound { .. }));

    let notices = ui.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].body.key(), "str_companion_found");
    assert_eq!(
        notices[0].body.var("COMPANION"),
        Some(receipt.companion.name.as_str())
    );
}

#[tokio::test]
async fn cancelling_commits_nothing() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::cancelling();
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    let outcome = decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap();

    assert_eq!(outcome, DecisionOutcome::Cancelled);
    assert_eq!(decision.state(), DecisionState::Cancelled);
    assert!(host.journal().is_empty());
    assert!(ui.notices().is_empty());
}

#[tokio::test]
async fn automated_mode_always_fails_loudly() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::confirming("commander");
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    let err = decision
        .drive(
            DecisionMode::Automated,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DecisionError::NotImplemented { .. }));
    assert_eq!(decision.state(), DecisionState::Created);
    assert!(host.journal().is_empty());
}

#[tokio::test]
async fn a_decision_is_consumed_after_one_drive() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::cancelling();
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap();

    let err = decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap_err();

    assert_eq!(err, DecisionError::InvalidState(DecisionState::Cancelled));
}

#[tokio::test]
async fn confirming_an_unknown_role_errors() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let ui = ScriptedInquiryPort::confirming("bard");
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    let err = decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap_err();

    assert_eq!(err, DecisionError::UnknownRole(RoleId::from("bard")));
    assert!(host.journal().is_empty());
}

/// Port that violates the required-count contract by confirming nothing.
struct EmptyConfirmPort;

#[async_trait]
impl InquiryPort for EmptyConfirmPort {
    async fn choose(&self, _inquiry: SelectionInquiry) -> InquiryOutcome {
        InquiryOutcome::Confirmed(Vec::new())
    }

    async fn acknowledge(&self, _notice: Notice) {}
}

#[tokio::test]
async fn confirming_nothing_is_a_contract_violation() {
    let templates = MemoryTemplateRegistry::new(vec![commander_candidate()]);
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env =
        Env::with_all(&templates, &equipment, &settlements, &config, &rng).into_campaign_env();

    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    let err = decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &EmptyConfirmPort,
            &mut host,
            7,
        )
        .await
        .unwrap_err();

    assert_eq!(err, DecisionError::MissingSelection);
    assert!(host.journal().is_empty());
}

/// Port that drains the candidate pool while the inquiry is open, emulating
/// another recruitment consuming the last candidate mid-suspension.
struct PoolDrainingPort {
    registry: Arc<MemoryTemplateRegistry>,
}

#[async_trait]
impl InquiryPort for PoolDrainingPort {
    async fn choose(&self, _inquiry: SelectionInquiry) -> InquiryOutcome {
        self.registry.clear();
        InquiryOutcome::Confirmed(vec!["commander".to_owned()])
    }

    async fn acknowledge(&self, _notice: Notice) {}
}

#[tokio::test]
async fn pool_drained_during_suspension_fails_the_commit() {
    let templates = Arc::new(MemoryTemplateRegistry::new(vec![commander_candidate()]));
    let equipment = default_rosters();
    let settlements = default_settlements();
    let config = CampaignConfig::default();
    let rng = PcgRng;
    let env = Env::with_all(
        templates.as_ref(),
        &equipment,
        &settlements,
        &config,
        &rng,
    )
    .into_campaign_env();

    let ui = PoolDrainingPort {
        registry: Arc::clone(&templates),
    };
    let mut host = MemoryHost::default();
    let mut decision = RecruitCompanionDecision::new(RoleCatalog::builtin());

    let err = decision
        .drive(
            DecisionMode::Interactive,
            &recruiter(6000, None),
            &env,
            &ui,
            &mut host,
            7,
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DecisionError::NoCandidateAvailable(RoleId::from("commander"))
    );
    assert!(host.journal().is_empty());
}
