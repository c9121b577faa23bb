//! Asynchronous modal-UI port.
//!
//! The host UI owns rendering and input; the decision hands it a
//! single-choice inquiry payload and suspends until the user confirms or
//! cancels. There is no timeout and no cancellation beyond the user's own
//! cancel action.

use std::sync::Mutex;

use async_trait::async_trait;
use campaign_core::TextTemplate;

/// One selectable entry in a single-choice inquiry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InquiryOption {
    /// Opaque identifier echoed back on confirmation.
    pub id: String,
    pub label: String,
    pub enabled: bool,
    /// Explains the option: why it is disabled, or what it does.
    pub hint: TextTemplate,
}

/// Single-choice modal payload handed to the host UI.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SelectionInquiry {
    pub title: TextTemplate,
    pub description: TextTemplate,
    pub options: Vec<InquiryOption>,
    /// Number of entries the user must select before confirming.
    pub required: usize,
    pub confirm_label: TextTemplate,
    pub cancel_label: TextTemplate,
}

/// Resolution of a [`SelectionInquiry`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InquiryOutcome {
    /// The user confirmed with the ids of the selected options.
    Confirmed(Vec<String>),
    /// The user dismissed the inquiry.
    Cancelled,
}

/// One-button acknowledgment prompt.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Notice {
    pub title: TextTemplate,
    pub body: TextTemplate,
    pub button_label: TextTemplate,
}

/// Trait for the host's modal inquiry surface.
///
/// Different implementations can handle:
/// - Real UI frontends
/// - Scripted fixtures for tests and headless runs
#[async_trait]
pub trait InquiryPort: Send + Sync {
    /// Present a single-choice modal; resolves when the user confirms or cancels.
    async fn choose(&self, inquiry: SelectionInquiry) -> InquiryOutcome;

    /// Show a one-button acknowledgment prompt.
    async fn acknowledge(&self, notice: Notice);
}

/// A scripted port that always resolves the same way.
///
/// Records what it was shown so tests can assert on presentation.
pub struct ScriptedInquiryPort {
    choice: Option<String>,
    seen: Mutex<Option<SelectionInquiry>>,
    notices: Mutex<Vec<Notice>>,
}

impl ScriptedInquiryPort {
    /// Port that confirms the option with the given id.
    pub fn confirming(id: impl Into<String>) -> Self {
        Self {
            choice: Some(id.into()),
            seen: Mutex::new(None),
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Port that always cancels.
    pub fn cancelling() -> Self {
        Self {
            choice: None,
            seen: Mutex::new(None),
            notices: Mutex::new(Vec::new()),
        }
    }

    /// The most recent inquiry shown to this port.
    pub fn last_inquiry(&self) -> Option<SelectionInquiry> {
        self.seen.lock().expect("inquiry record poisoned").clone()
    }

    /// Every acknowledgment notice shown to this port.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice record poisoned").clone()
    }
}

#[async_trait]
impl InquiryPort for ScriptedInquiryPort {
    async fn choose(&self, inquiry: SelectionInquiry) -> InquiryOutcome {
        *self.seen.lock().expect("inquiry record poisoned") = Some(inquiry);
        match &self.choice {
            Some(id) => InquiryOutcome::Confirmed(vec![id.clone()]),
            None => InquiryOutcome::Cancelled,
        }
    }

    async fn acknowledge(&self, notice: Notice) {
        self.notices.lock().expect("notice record poisoned").push(notice);
    }
}
