//! Sub-skill filter — drops skills that are redundant next to their parent skill
//! (e.g. "pandas" when "python" is already listed).
//!
//! The parent → sub-skill mapping is configuration data loaded from a JSON object file:
//!
//! ```json
//! { "python": ["pandas", "numpy"], "javascript": ["react", "node.js"] }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::comparison::normalize_skill;

/// Parent skill → subordinate skills, keyed and valued by normalized skill name.
#[derive(Debug, Clone, Default)]
pub struct SubSkillMap {
    parents: HashMap<String, HashSet<String>>,
}

impl SubSkillMap {
    pub fn from_mapping(mapping: HashMap<String, Vec<String>>) -> Self {
        let mut parents: HashMap<String, HashSet<String>> = HashMap::new();
        for (parent, children) in mapping {
            let parent = normalize_skill(&parent);
            if parent.is_empty() {
                continue;
            }
            parents.entry(parent.clone()).or_default().extend(
                children
                    .iter()
                    .map(|c| normalize_skill(c))
                    .filter(|c| !c.is_empty() && *c != parent),
            );
        }
        Self { parents }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mapping: HashMap<String, Vec<String>> =
            serde_json::from_str(json).context("sub-skill map must be a JSON object of string arrays")?;
        Ok(Self::from_mapping(mapping))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sub-skill map '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid sub-skill map '{}'", path.display()))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns `skills` without entries whose parent skill is also present.
    /// Order and original spelling of the kept skills are preserved.
    pub fn filter(&self, skills: &[String]) -> Vec<String> {
        if self.parents.is_empty() {
            return skills.to_vec();
        }

        let present: HashSet<String> = skills.iter().map(|s| normalize_skill(s)).collect();
        let redundant: HashSet<&String> = self
            .parents
            .iter()
            .filter(|(parent, _)| present.contains(*parent))
            .flat_map(|(_, children)| children.iter())
            .collect();

        skills
            .iter()
            .filter(|s| !redundant.contains(&normalize_skill(s)))
            .cloned()
            .collect()
    }
}
