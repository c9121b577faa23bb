//! Host-facing orchestration for campaign decisions.
//!
//! `campaign-runtime` wires the pure rules in `campaign-core` to the host
//! simulation: the recruitment decision workflow, the commit step that
//! mutates the world, the async modal-UI port it suspends on, and in-memory
//! registries for tests and headless fixtures.

pub mod decision;
pub mod error;
pub mod host;
pub mod registry;
pub mod ui;

pub use decision::{
    DecisionOutcome, RecruitCompanionDecision, RecruitmentCommitter, RecruitmentReceipt,
};
pub use error::DecisionError;
pub use host::{CampaignHost, NewCompanion};
pub use registry::{
    HostMutation, MemoryEquipmentRegistry, MemoryHost, MemorySettlementRegistry,
    MemoryTemplateRegistry, SettlementRecord,
};
pub use ui::{
    InquiryOption, InquiryOutcome, InquiryPort, Notice, ScriptedInquiryPort, SelectionInquiry,
};
