//! Rule engine: decides which skills apply to a file path or a prompt.
//!
//! All query operations are total. Configuration faults degrade to an empty
//! rule set and per-pattern faults skip the offending pattern, so a broken
//! project configuration can never abort the calling hook.

mod path_match;
mod prompt_match;
mod rank;
mod store;

pub use rank::rank;
pub use store::ConfigStore;

use std::path::Path;

use crate::config::SkillRule;

/// Facade over the config store and the matchers. Owns one store; the
/// `&mut self` receivers make the cache single-writer by construction.
pub struct RuleEngine {
    store: ConfigStore,
}

impl RuleEngine {
    #[must_use]
    pub fn new(project_root: &Path) -> Self {
        Self {
            store: ConfigStore::new(project_root),
        }
    }

    /// Match skills whose path patterns cover `file_path`, ordered by
    /// descending priority. Exclusion patterns always win over inclusions.
    pub fn match_by_path(&mut self, file_path: &str) -> Vec<String> {
        let config = self.store.load();
        let matched: Vec<String> = config
            .skills
            .iter()
            .filter(|(_, rule)| path_match::rule_matches_path(file_path, rule))
            .map(|(name, _)| name.clone())
            .collect();
        rank::rank(matched, &config)
    }

    /// Match skills whose keyword or intent triggers fire on `prompt`,
    /// ordered by descending priority.
    pub fn match_by_prompt(&mut self, prompt: &str) -> Vec<String> {
        let config = self.store.load();
        let matched: Vec<String> = config
            .skills
            .iter()
            .filter(|(_, rule)| {
                rule.prompt_triggers
                    .as_ref()
                    .is_some_and(|triggers| prompt_match::triggers_match(prompt, triggers))
            })
            .map(|(name, _)| name.clone())
            .collect();
        rank::rank(matched, &config)
    }

    /// Look up one rule by skill name.
    pub fn get_skill_info(&mut self, name: &str) -> Option<SkillRule> {
        self.store.load().skills.get(name).cloned()
    }

    /// All configured skill names, in name order.
    pub fn skill_names(&mut self) -> Vec<String> {
        self.store.load().skills.keys().cloned().collect()
    }

    /// Drop the cached configuration; the next operation re-reads the file
    /// regardless of its modification time.
    pub fn reload(&mut self) {
        self.store.invalidate();
    }

    /// The configuration file this engine reads.
    #[must_use]
    pub fn rules_path(&self) -> &Path {
        self.store.path()
    }
}
