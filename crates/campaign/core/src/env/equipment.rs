//! Equipment roster definitions and registry interface.

use bitflags::bitflags;

use crate::types::{CultureId, LoadoutId, RosterId};

bitflags! {
    /// Classification flags on an equipment roster.
    ///
    /// Recruitment prefers COMPANION-flagged rosters and falls back to MEDIUM
    /// ones of the same culture.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RosterFlags: u8 {
        /// Tagged for companion outfitting.
        const COMPANION = 1 << 0;
        const LIGHT     = 1 << 1;
        const MEDIUM    = 1 << 2;
        const HEAVY     = 1 << 3;
        const CIVILIAN  = 1 << 4;
    }
}

/// A culture-bound set of concrete equipment loadouts.
///
/// One loadout is drawn uniformly from the chosen roster when a companion is
/// outfitted; `weight` biases the roster draw itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentRoster {
    pub id: RosterId,
    pub culture: CultureId,
    pub flags: RosterFlags,
    /// Relative weight for the roster draw among matching rosters.
    pub weight: u32,
    pub loadouts: Vec<LoadoutId>,
}

/// Registry interface for equipment rosters.
pub trait EquipmentOracle: Send + Sync {
    /// All rosters whose equipment culture matches.
    fn rosters_of(&self, culture: &CultureId) -> Vec<EquipmentRoster>;
}
