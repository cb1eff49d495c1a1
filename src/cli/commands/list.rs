use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(ctx: &mut AppContext, _args: &ListArgs) -> Result<()> {
    let names = ctx.engine.skill_names();

    if ctx.robot_mode {
        let details: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                let rule = ctx.engine.get_skill_info(name);
                serde_json::json!({
                    "name": name,
                    "type": rule.as_ref().map(|r| r.kind.as_str()),
                    "enforcement": rule.as_ref().map(|r| r.enforcement.as_str()),
                    "priority": rule.as_ref().map(|r| r.priority.as_str()),
                })
            })
            .collect();
        return emit_json(&robot_ok(serde_json::json!({
            "rulesPath": ctx.engine.rules_path().display().to_string(),
            "skills": details,
        })));
    }

    let mut layout = HumanLayout::new();
    if names.is_empty() {
        layout.kv(
            "No skill rules",
            &ctx.engine.rules_path().display().to_string(),
        );
        emit_human(layout);
        return Ok(());
    }

    layout.title(&format!("Skill rules ({})", names.len()));
    for name in &names {
        if let Some(rule) = ctx.engine.get_skill_info(name) {
            layout.kv(
                name,
                &format!(
                    "{} / {} / {}",
                    rule.kind.as_str(),
                    rule.enforcement.as_str(),
                    rule.priority.as_str()
                ),
            );
        }
    }
    emit_human(layout);
    Ok(())
}
