//! The companion recruitment decision.
//!
//! Orchestrates one recruitment attempt: builds the gated option list,
//! suspends on the modal UI, and hands the confirmed role to the committer
//! as a synchronous continuation. Constructed once per invocation and
//! discarded after it reaches a terminal state.

use campaign_core::{
    AffordabilityGate, CampaignEnv, CandidateScorer, DecisionMode, DecisionState, Recruiter,
    RoleId, TextTemplate,
};
use campaign_content::RoleCatalog;

use crate::decision::{DecisionOutcome, RecruitmentCommitter};
use crate::error::DecisionError;
use crate::host::CampaignHost;
use crate::ui::{InquiryOption, InquiryOutcome, InquiryPort, SelectionInquiry};

const DECISION_ID: &str = "recruit_companion";

/// Interactive decision that recruits a companion into the player's clan.
pub struct RecruitCompanionDecision {
    catalog: RoleCatalog,
    state: DecisionState,
    /// Role id captured by the confirm handler; read exactly once to drive
    /// the commit.
    pending: Option<RoleId>,
}

impl RecruitCompanionDecision {
    /// Creates a decision over the given role catalog.
    ///
    /// The catalog is injected rather than owned statically so scoring and
    /// gating can be exercised against any role set.
    pub fn new(catalog: RoleCatalog) -> Self {
        Self {
            catalog,
            state: DecisionState::Created,
            pending: None,
        }
    }

    pub fn id(&self) -> &'static str {
        DECISION_ID
    }

    pub fn name(&self) -> TextTemplate {
        TextTemplate::new("str_recruit_companion", "Recruit Companion")
    }

    pub fn description(&self) -> TextTemplate {
        TextTemplate::new(
            "str_recruit_companion_desc",
            "Select a type of companion to recruit.",
        )
    }

    pub fn state(&self) -> DecisionState {
        self.state
    }

    /// This decision has no preconditions beyond existing.
    pub fn is_available(&self) -> bool {
        true
    }

    /// Reasons the decision is not currently fulfillable.
    ///
    /// Advisory only: presentation proceeds regardless, and the reasons
    /// surface as hints on disabled options.
    pub fn fulfillment(&self, recruiter: &Recruiter) -> Vec<TextTemplate> {
        let mut reasons = Vec::new();
        if !AffordabilityGate::any_affordable(recruiter, self.catalog.roles()) {
            reasons.push(TextTemplate::new(
                "str_cannot_afford_companion",
                "You can't afford any companion.",
            ));
        }
        reasons
    }

    /// Drives the decision to a terminal state.
    ///
    /// # Errors
    ///
    /// `DecisionMode::Automated` always fails with
    /// [`DecisionError::NotImplemented`]; there is no non-interactive
    /// resolution path. Driving a decision twice fails with
    /// [`DecisionError::InvalidState`].
    pub async fn drive(
        &mut self,
        mode: DecisionMode,
        recruiter: &Recruiter,
        env: &CampaignEnv<'_>,
        ui: &dyn InquiryPort,
        host: &mut dyn CampaignHost,
        seed: u64,
    ) -> Result<DecisionOutcome, DecisionError> {
        match mode {
            DecisionMode::Interactive => self.present(recruiter, env, ui, host, seed).await,
            DecisionMode::Automated => Err(DecisionError::NotImplemented {
                decision: DECISION_ID,
            }),
        }
    }

    async fn present(
        &mut self,
        recruiter: &Recruiter,
        env: &CampaignEnv<'_>,
        ui: &dyn InquiryPort,
        host: &mut dyn CampaignHost,
        seed: u64,
    ) -> Result<DecisionOutcome, DecisionError> {
        if self.state != DecisionState::Created {
            return Err(DecisionError::InvalidState(self.state));
        }

        let reasons = self.fulfillment(recruiter);
        let templates = env.templates()?;

        let mut options = Vec::with_capacity(self.catalog.len());
        for role in self.catalog.roles() {
            let affordable = AffordabilityGate::can_afford(recruiter, role);
            let pool = templates.wanderer_pool(&recruiter.culture);
            let candidate = CandidateScorer::best(&pool, role);
            let enabled = affordable && candidate.is_some();

            // Hint precedence: a missing candidate trumps affordability.
            let hint = if candidate.is_none() {
                TextTemplate::new(
                    "str_no_candidate_available",
                    "No candidates of this type available.",
                )
            } else if !affordable {
                reasons
                    .first()
                    .cloned()
                    .unwrap_or_else(|| TextTemplate::literal(role.description.clone()))
            } else {
                TextTemplate::literal(role.description.clone())
            };

            tracing::debug!(
                role = %role.id,
                affordable,
                has_candidate = candidate.is_some(),
                enabled,
                "role gated for presentation"
            );

            options.push(InquiryOption {
                id: role.id.as_str().to_owned(),
                label: role.name.clone(),
                enabled,
                hint,
            });
        }

        let inquiry = SelectionInquiry {
            title: TextTemplate::new("str_companions", "Companions"),
            description: TextTemplate::new(
                "str_choose_companion",
                "Choose a companion to recruit.",
            ),
            options,
            required: 1,
            confirm_label: TextTemplate::new("str_done", "Done"),
            cancel_label: TextTemplate::new("str_cancel", "Cancel"),
        };

        self.state = DecisionState::Presented;
        match ui.choose(inquiry).await {
            InquiryOutcome::Cancelled => {
                tracing::debug!("recruitment dismissed");
                self.state = DecisionState::Cancelled;
                Ok(DecisionOutcome::Cancelled)
            }
            InquiryOutcome::Confirmed(ids) => {
                let Some(first) = ids.into_iter().next() else {
                    return Err(DecisionError::MissingSelection);
                };
                self.pending = Some(RoleId::new(first));
                self.state = DecisionState::Confirmed;

                let Some(chosen) = self.pending.take() else {
                    return Err(DecisionError::InvalidState(self.state));
                };
                let role = self
                    .catalog
                    .get(&chosen)
                    .cloned()
                    .ok_or(DecisionError::UnknownRole(chosen))?;

                let receipt =
                    RecruitmentCommitter::apply(recruiter, &role, env, host, ui, seed).await?;
                self.state = DecisionState::Applied;
                Ok(DecisionOutcome::Applied(receipt))
            }
        }
    }
}
