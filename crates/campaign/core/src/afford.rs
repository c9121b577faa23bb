//! Affordability gating for role presentation.

use crate::role::Role;
use crate::types::Recruiter;

/// Checks an actor's liquid resources against role costs.
///
/// Either resource alone is enough: a role is affordable when the actor can
/// cover its gold cost or its influence cost. An actor without clan standing
/// has no influence to spend, so only the gold branch can pass.
pub struct AffordabilityGate;

impl AffordabilityGate {
    /// True when the recruiter can pay for the role with gold or influence.
    pub fn can_afford(recruiter: &Recruiter, role: &Role) -> bool {
        recruiter.gold >= role.gold_cost
            || recruiter
                .influence
                .is_some_and(|influence| influence >= role.influence_cost)
    }

    /// True when at least one role passes [`Self::can_afford`].
    pub fn any_affordable<'a, I>(recruiter: &Recruiter, roles: I) -> bool
    where
        I: IntoIterator<Item = &'a Role>,
    {
        roles
            .into_iter()
            .any(|role| Self::can_afford(recruiter, role))
    }
}
