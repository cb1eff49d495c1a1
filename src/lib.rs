//! skillhook - rule engine deciding which Claude Code skills apply to a
//! file path or a user prompt.
//!
//! The engine reads a declarative rule file at
//! `.claude/skills/skill-rules.json` under the project root and exposes two
//! matching operations: path-based (glob patterns with exclusions) and
//! prompt-based (keywords and regex intents). Matches are ranked by a fixed
//! priority scale. Every query operation is total: a missing, malformed, or
//! partially invalid configuration degrades to fewer matches, never to an
//! error in the calling hook.

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;

pub use error::{HookError, Result};
