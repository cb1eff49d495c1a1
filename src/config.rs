//! Typed rule configuration consumed from `.claude/skills/skill-rules.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Project-relative location of the rule configuration file.
pub const RULES_PATH: &str = ".claude/skills/skill-rules.json";

/// The whole rule file. Immutable once parsed; rebuilt wholesale on reload.
///
/// `skills` is a `BTreeMap` so rule iteration is in skill-name order, which
/// makes equal-priority match ordering alphabetical and deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub version: String,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillRule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            skills: BTreeMap::new(),
        }
    }
}

/// One matching rule, keyed in the config by its unique skill name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRule {
    #[serde(rename = "type", default)]
    pub kind: SkillType,
    #[serde(default)]
    pub enforcement: Enforcement,
    #[serde(default)]
    pub priority: Priority,
    /// Inclusion globs; a rule without any can never match by path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_patterns: Option<Vec<String>>,
    /// Keyword and intent triggers; a rule without any can never match by
    /// prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_triggers: Option<PromptTriggers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Exclusions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptTriggers {
    /// Case-insensitive substring matches against the prompt.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Case-insensitive regex patterns tested against the prompt.
    #[serde(default)]
    pub intents: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exclusions {
    /// Globs that veto a path match regardless of `path_patterns`.
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Rule classification. Not consulted by the matchers; reported to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SkillType {
    Domain,
    Guardrail,
    Tooling,
    #[default]
    Unknown,
}

impl From<String> for SkillType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "domain" => Self::Domain,
            "guardrail" => Self::Guardrail,
            "tooling" => Self::Tooling,
            _ => Self::Unknown,
        }
    }
}

impl SkillType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Guardrail => "guardrail",
            Self::Tooling => "tooling",
            Self::Unknown => "unknown",
        }
    }
}

/// How strongly a matched skill should be surfaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Enforcement {
    Suggest,
    Warn,
    Block,
    #[default]
    Unknown,
}

impl From<String> for Enforcement {
    fn from(value: String) -> Self {
        match value.as_str() {
            "suggest" => Self::Suggest,
            "warn" => Self::Warn,
            "block" => Self::Block,
            _ => Self::Unknown,
        }
    }
}

impl Enforcement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suggest => "suggest",
            Self::Warn => "warn",
            Self::Block => "block",
            Self::Unknown => "unknown",
        }
    }
}

/// Ranking tier for ordering multiple matches.
///
/// Any value outside the enumerated set parses to `Unknown`, which ranks
/// last instead of failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }
}

impl Priority {
    /// Numeric weight used by the ranker. Higher sorts first.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unknown => 0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}
