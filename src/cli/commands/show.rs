use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::{HookError, Result};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Skill name to look up
    pub skill: String,
}

pub fn run(ctx: &mut AppContext, args: &ShowArgs) -> Result<()> {
    let Some(rule) = ctx.engine.get_skill_info(&args.skill) else {
        return Err(HookError::UnknownSkill(args.skill.clone()));
    };

    if ctx.robot_mode {
        return emit_json(&robot_ok(serde_json::json!({
            "name": args.skill,
            "rule": rule,
        })));
    }

    let mut layout = HumanLayout::new();
    layout
        .title(&args.skill)
        .kv("Type", rule.kind.as_str())
        .kv("Enforcement", rule.enforcement.as_str())
        .kv("Priority", rule.priority.as_str());

    if let Some(patterns) = &rule.path_patterns {
        layout.kv("Paths", &patterns.join(", "));
    }
    if let Some(triggers) = &rule.prompt_triggers {
        if !triggers.keywords.is_empty() {
            layout.kv("Keywords", &triggers.keywords.join(", "));
        }
        if !triggers.intents.is_empty() {
            layout.kv("Intents", &triggers.intents.join(", "));
        }
    }
    if let Some(exclusions) = &rule.exclusions {
        if !exclusions.paths.is_empty() {
            layout.kv("Excluded", &exclusions.paths.join(", "));
        }
    }

    emit_human(layout);
    Ok(())
}
