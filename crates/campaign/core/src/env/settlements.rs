//! Settlement registry interface.
//!
//! The committer resolves a birth settlement through a fixed fallback chain:
//! culture match, then clan ownership, then any settlement. The three query
//! surfaces below exist in exactly that order of preference.

use crate::types::{ClanId, CultureId, SettlementId};

/// Registry interface for settlements owned by the host campaign.
pub trait SettlementOracle: Send + Sync {
    /// Settlements of the given culture.
    fn of_culture(&self, culture: &CultureId) -> Vec<SettlementId>;

    /// Settlements owned by the given clan.
    fn owned_by(&self, clan: ClanId) -> Vec<SettlementId>;

    /// Every settlement in the campaign.
    fn all(&self) -> Vec<SettlementId>;
}
