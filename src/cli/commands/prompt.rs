use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::{HookError, Result};

#[derive(Args, Debug)]
pub struct PromptArgs {}

/// Payload Claude Code writes to the hook's stdin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptPayload {
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    working_directory: Option<String>,
    #[serde(default)]
    recent_files: Vec<String>,
}

pub fn run(ctx: &mut AppContext, _args: &PromptArgs) -> Result<()> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let payload: PromptPayload = serde_json::from_str(&raw)
        .map_err(|err| HookError::InvalidInput(format!("parse hook payload: {err}")))?;

    if payload.prompt.trim().is_empty() {
        return Ok(());
    }

    // The payload's working directory only applies when neither the flag nor
    // the hook environment pinned a root.
    if !ctx.explicit_root {
        if let Some(dir) = &payload.working_directory {
            ctx.reroot(PathBuf::from(dir));
        }
    }

    let mut suggestions = ctx.engine.match_by_prompt(&payload.prompt);
    for file in &payload.recent_files {
        for name in ctx.engine.match_by_path(file) {
            if !suggestions.contains(&name) {
                suggestions.push(name);
            }
        }
    }

    if ctx.robot_mode {
        let details: Vec<serde_json::Value> = suggestions
            .iter()
            .map(|name| {
                let rule = ctx.engine.get_skill_info(name);
                serde_json::json!({
                    "name": name,
                    "enforcement": rule.as_ref().map(|r| r.enforcement.as_str()),
                    "title": skill_title(&ctx.project_root, name),
                })
            })
            .collect();
        return emit_json(&robot_ok(serde_json::json!({
            "suggestions": details,
        })));
    }

    if suggestions.is_empty() {
        return Ok(());
    }

    let mut layout = HumanLayout::new();
    layout.title("Based on your prompt and recent files, consider these skills:");
    for (index, name) in suggestions.iter().enumerate() {
        let line = ctx.engine.get_skill_info(name).map_or_else(
            || name.clone(),
            |rule| format!("{name} ({})", rule.enforcement.as_str()),
        );
        layout.item(index + 1, &line);
        if let Some(title) = skill_title(&ctx.project_root, name) {
            layout.note(&title);
        }
    }
    layout.blank();
    emit_human(layout);
    Ok(())
}

/// First markdown heading of the skill's SKILL.md, if it has one.
fn skill_title(project_root: &Path, name: &str) -> Option<String> {
    let path = project_root
        .join(".claude/skills")
        .join(name)
        .join("SKILL.md");
    let content = std::fs::read_to_string(path).ok()?;
    content
        .lines()
        .map(str::trim_start)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
}
