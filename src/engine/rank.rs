//! Priority ranking of matched rule names.

use crate::config::RuleConfig;

/// Order matched rule names by descending priority weight.
///
/// The sort is stable, so names presented in alphabetical order stay
/// alphabetical within a priority tier. Names with no configured rule rank
/// last alongside `Priority::Unknown`.
#[must_use]
pub fn rank(names: Vec<String>, config: &RuleConfig) -> Vec<String> {
    let mut weighted: Vec<(u8, String)> = names
        .into_iter()
        .map(|name| {
            let weight = config
                .skills
                .get(&name)
                .map_or(0, |rule| rule.priority.weight());
            (weight, name)
        })
        .collect();
    weighted.sort_by(|a, b| b.0.cmp(&a.0));
    weighted.into_iter().map(|(_, name)| name).collect()
}
