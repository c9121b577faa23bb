//! Recruitable role catalog.
//!
//! The catalog is an ordered, immutable sequence of roles, constructed once
//! and injected into the decision workflow. The built-in set covers the
//! standard companion archetypes; hosts with custom balance load their own
//! catalog from RON instead.

use campaign_core::{Role, RoleId};

/// Ordered, immutable catalog of recruitable roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    /// Wraps an ordered role list. Presentation order follows this order.
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// The built-in companion archetypes.
    ///
    /// Every archetype costs 5000 gold or 100 influence; they differ only in
    /// scoring criteria.
    pub fn builtin() -> Self {
        Self::new(vec![
            Role::builder("commander")
                .name("Commander")
                .description("A companion that meets the criteria for a Commander.")
                .costs(5000, 100)
                .require_trait("commander")
                .require_skill("leadership")
                .require_skill("tactics")
                .build(),
            Role::builder("thief")
                .name("Thief")
                .description("A companion that meets the criteria for a Thief.")
                .costs(5000, 100)
                .require_trait("thief")
                .require_skill("roguery")
                .build(),
            Role::builder("surgeon")
                .name("Surgeon")
                .description("A companion that meets the criteria for a Surgeon.")
                .costs(5000, 100)
                .require_trait("surgeon")
                .require_skill("medicine")
                .build(),
            Role::builder("caravaneer")
                .name("Caravaneer")
                .description("A companion that meets the criteria for a Caravaneer.")
                .costs(5000, 100)
                .require_trait("manager")
                .require_skill("stewardship")
                .require_skill("scouting")
                .build(),
            Role::builder("warrior")
                .name("Warrior")
                .description("A companion that meets the criteria for a Warrior.")
                .costs(5000, 100)
                .require_trait("fighter")
                .require_skill("one_handed")
                .require_skill("two_handed")
                .require_skill("polearm")
                .require_skill("bow")
                .require_skill("crossbow")
                .require_skill("throwing")
                .require_skill("riding")
                .require_skill("athletics")
                .build(),
        ])
    }

    /// Roles in presentation order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Looks up a role by id.
    pub fn get(&self, id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|role| &role.id == id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
