//! Integration tests for the rule engine public API.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::Duration;

use skillhook::engine::RuleEngine;
use tempfile::TempDir;

fn write_rules(root: &Path, content: &str) {
    let dir = root.join(".claude/skills");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("skill-rules.json"), content).unwrap();
}

fn engine_with(content: &str) -> (TempDir, RuleEngine) {
    let dir = TempDir::new().unwrap();
    write_rules(dir.path(), content);
    let engine = RuleEngine::new(dir.path());
    (dir, engine)
}

#[test]
fn path_matches_rank_by_priority() {
    // Both rules match; critical outranks high.
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "a": { "priority": "high", "pathPatterns": ["*.test.ts"] },
                "b": { "priority": "critical", "pathPatterns": ["*.ts"] }
            }
        }"#,
    );
    assert_eq!(engine.match_by_path("src/foo.test.ts"), vec!["b", "a"]);
}

#[test]
fn prompt_matches_rank_by_priority() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "c": { "priority": "high", "promptTriggers": { "keywords": ["database"] } },
                "d": { "priority": "critical", "promptTriggers": { "intents": ["refactor.*"] } }
            }
        }"#,
    );
    assert_eq!(
        engine.match_by_prompt("please refactor the database schema"),
        vec!["d", "c"]
    );
}

#[test]
fn missing_config_yields_empty_matches() {
    let dir = TempDir::new().unwrap();
    let mut engine = RuleEngine::new(dir.path());
    assert!(engine.match_by_path("anything.ts").is_empty());
    assert!(engine.match_by_prompt("anything").is_empty());
    assert!(engine.get_skill_info("anything").is_none());
}

#[test]
fn malformed_config_yields_empty_matches() {
    let (_dir, mut engine) = engine_with("{ broken json !");
    assert!(engine.match_by_path("anything.ts").is_empty());
    assert!(engine.match_by_prompt("anything").is_empty());
}

#[test]
fn exclusion_always_wins() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "ts": {
                    "priority": "high",
                    "pathPatterns": ["*.ts"],
                    "exclusions": { "paths": ["*.test.ts"] }
                }
            }
        }"#,
    );
    assert_eq!(engine.match_by_path("src/foo.ts"), vec!["ts"]);
    assert!(engine.match_by_path("src/foo.test.ts").is_empty());
}

#[test]
fn prompt_only_rule_never_matches_by_path() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "p": { "priority": "high", "promptTriggers": { "keywords": ["deploy"] } }
            }
        }"#,
    );
    assert!(engine.match_by_path("deploy.ts").is_empty());
    assert_eq!(engine.match_by_prompt("deploy it"), vec!["p"]);
}

#[test]
fn invalid_intent_is_isolated_from_other_rules() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "broken": { "priority": "critical", "promptTriggers": { "intents": ["[invalid("] } },
                "working": { "priority": "low", "promptTriggers": { "keywords": ["valid"] } }
            }
        }"#,
    );
    assert_eq!(engine.match_by_prompt("a valid prompt"), vec!["working"]);
}

#[test]
fn equal_priorities_tie_break_alphabetically() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "zeta": { "priority": "medium", "pathPatterns": ["*.rs"] },
                "alpha": { "priority": "medium", "pathPatterns": ["*.rs"] },
                "mid": { "priority": "medium", "pathPatterns": ["*.rs"] }
            }
        }"#,
    );
    assert_eq!(
        engine.match_by_path("src/lib.rs"),
        vec!["alpha", "mid", "zeta"]
    );
}

#[test]
fn unknown_priority_ranks_last_without_crashing() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "odd": { "priority": "mega", "pathPatterns": ["*.rs"] },
                "normal": { "priority": "low", "pathPatterns": ["*.rs"] }
            }
        }"#,
    );
    assert_eq!(engine.match_by_path("main.rs"), vec!["normal", "odd"]);
}

#[test]
fn get_skill_info_round_trips() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "api": { "type": "domain", "enforcement": "warn", "priority": "high" }
            }
        }"#,
    );
    let rule = engine.get_skill_info("api").unwrap();
    assert_eq!(rule.priority.as_str(), "high");
    assert_eq!(rule.enforcement.as_str(), "warn");
    assert!(engine.get_skill_info("missing").is_none());
}

#[test]
fn unchanged_mtime_serves_stale_content_until_reload() {
    let (dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": { "alpha": { "priority": "high", "pathPatterns": ["*.ts"] } }
        }"#,
    );
    assert_eq!(engine.match_by_path("foo.ts"), vec!["alpha"]);

    let rules = dir.path().join(".claude/skills/skill-rules.json");
    let mtime = fs::metadata(&rules).unwrap().modified().unwrap();

    // Rewrite the file, then restore the original mtime to simulate a write
    // the mtime-based staleness check cannot see.
    fs::write(
        &rules,
        r#"{
            "version": "1.0",
            "skills": { "beta": { "priority": "high", "pathPatterns": ["*.ts"] } }
        }"#,
    )
    .unwrap();
    let file = OpenOptions::new().write(true).open(&rules).unwrap();
    file.set_modified(mtime).unwrap();
    drop(file);

    assert_eq!(engine.match_by_path("foo.ts"), vec!["alpha"]);

    engine.reload();
    assert_eq!(engine.match_by_path("foo.ts"), vec!["beta"]);
}

#[test]
fn newer_mtime_refreshes_config() {
    let (dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": { "alpha": { "priority": "high", "pathPatterns": ["*.ts"] } }
        }"#,
    );
    assert_eq!(engine.match_by_path("foo.ts"), vec!["alpha"]);

    let rules = dir.path().join(".claude/skills/skill-rules.json");
    let mtime = fs::metadata(&rules).unwrap().modified().unwrap();
    fs::write(
        &rules,
        r#"{
            "version": "1.0",
            "skills": { "beta": { "priority": "high", "pathPatterns": ["*.ts"] } }
        }"#,
    )
    .unwrap();
    // Force a visibly newer mtime regardless of filesystem clock resolution.
    let file = OpenOptions::new().write(true).open(&rules).unwrap();
    file.set_modified(mtime + Duration::from_secs(2)).unwrap();
    drop(file);

    assert_eq!(engine.match_by_path("foo.ts"), vec!["beta"]);
}

#[test]
fn matching_is_idempotent() {
    let (_dir, mut engine) = engine_with(
        r#"{
            "version": "1.0",
            "skills": {
                "a": { "priority": "high", "pathPatterns": ["src/**/*.ts"] },
                "b": { "priority": "high", "promptTriggers": { "keywords": ["fix"] } }
            }
        }"#,
    );
    let first = engine.match_by_path("src/x/y.ts");
    let second = engine.match_by_path("src/x/y.ts");
    assert_eq!(first, second);

    let first = engine.match_by_prompt("fix the build");
    let second = engine.match_by_prompt("fix the build");
    assert_eq!(first, second);
}
