//! Role catalog loader.
//!
//! Loads recruitable roles from RON files into a [`RoleCatalog`].

use std::collections::BTreeSet;
use std::path::Path;

use campaign_core::Role;

use crate::catalog::RoleCatalog;
use crate::loaders::{LoadResult, read_file};

/// On-disk shape of a single role entry.
///
/// Criteria are plain strings in the file and resolved to typed ids here.
#[derive(Debug, serde::Deserialize)]
pub struct RoleSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub gold_cost: u32,
    pub influence_cost: u32,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl RoleSpec {
    fn into_role(self) -> Role {
        let mut builder = Role::builder(self.id.as_str())
            .name(self.name)
            .description(self.description)
            .costs(self.gold_cost, self.influence_cost);
        for trait_id in self.traits {
            builder = builder.require_trait(trait_id.as_str());
        }
        for perk in self.perks {
            builder = builder.require_perk(perk.as_str());
        }
        for skill in self.skills {
            builder = builder.require_skill(skill.as_str());
        }
        builder.build()
    }
}

/// Loader for role catalogs from RON files.
pub struct RoleLoader;

impl RoleLoader {
    /// Load a role catalog from a RON file.
    ///
    /// RON format: Vec<RoleSpec>. File order becomes presentation order.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    ///
    /// # Returns
    ///
    /// Returns a RoleCatalog, or an error on parse failure or duplicate ids.
    pub fn load(path: &Path) -> LoadResult<RoleCatalog> {
        let content = read_file(path)?;

        let specs: Vec<RoleSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse role catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for spec in &specs {
            if !seen.insert(spec.id.clone()) {
                anyhow::bail!("Duplicate role id '{}' in role catalog", spec.id);
            }
        }

        Ok(RoleCatalog::new(
            specs.into_iter().map(RoleSpec::into_role).collect(),
        ))
    }
}
