use std::fmt;

/// Unique identifier for a persistent character owned by the host campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for a clan (the player's organization).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClanId(pub u32);

impl fmt::Display for ClanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for a settlement in the host campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlementId(pub u32);

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declares a string-keyed definition id newtype.
///
/// Definition ids reference static campaign data (traits, skills, templates,
/// equipment rosters) by stable string key, the same way actor templates are
/// keyed in content files.
macro_rules! def_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

def_id! {
    /// Personality trait definition id (e.g. "commander", "thief").
    TraitId
}

def_id! {
    /// Behavioral perk definition id.
    PerkId
}

def_id! {
    /// Skill definition id (e.g. "leadership", "roguery").
    SkillId
}

def_id! {
    /// Template character definition id in the host's template registry.
    TemplateId
}

def_id! {
    /// Recruitable role definition id.
    RoleId
}

def_id! {
    /// Equipment roster definition id.
    RosterId
}

def_id! {
    /// Concrete equipment loadout definition id within a roster.
    LoadoutId
}

def_id! {
    /// Culture definition id used to filter templates, equipment and settlements.
    CultureId
}

/// Read-only resource snapshot of the actor driving a recruitment attempt.
///
/// The host simulation owns the live actor; this view is captured at the
/// start of a decision and never written back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recruiter {
    pub id: CharacterId,
    /// Liquid gold available to the actor.
    pub gold: u32,
    /// Clan influence; absent when the actor has no clan standing.
    pub influence: Option<u32>,
    /// Organization that gains the new companion.
    pub clan: ClanId,
    /// Culture used to filter candidate templates, equipment and settlements.
    pub culture: CultureId,
}
