use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File path to match, relative to the project root
    pub file_path: String,
}

pub fn run(ctx: &mut AppContext, args: &CheckArgs) -> Result<()> {
    let matches = ctx.engine.match_by_path(&args.file_path);

    if ctx.robot_mode {
        let details: Vec<serde_json::Value> = matches
            .iter()
            .map(|name| {
                let rule = ctx.engine.get_skill_info(name);
                serde_json::json!({
                    "name": name,
                    "priority": rule.as_ref().map(|r| r.priority.as_str()),
                    "enforcement": rule.as_ref().map(|r| r.enforcement.as_str()),
                })
            })
            .collect();
        return emit_json(&robot_ok(serde_json::json!({
            "filePath": args.file_path,
            "matches": details,
        })));
    }

    // Hook output channel: stay silent when nothing matches.
    if matches.is_empty() {
        return Ok(());
    }

    let mut layout = HumanLayout::new();
    layout.title("Suggested skills");
    for (index, name) in matches.iter().enumerate() {
        let line = ctx.engine.get_skill_info(name).map_or_else(
            || name.clone(),
            |rule| {
                format!(
                    "{name} (priority: {}, enforcement: {})",
                    rule.priority.as_str(),
                    rule.enforcement.as_str()
                )
            },
        );
        layout.item(index + 1, &line);
    }
    layout.blank();
    emit_human(layout);
    Ok(())
}
