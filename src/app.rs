use std::path::PathBuf;

use crate::cli::Cli;
use crate::engine::RuleEngine;
use crate::error::Result;

pub struct AppContext {
    pub project_root: PathBuf,
    /// Whether the root came from the flag or the hook environment, as
    /// opposed to the cwd fallback (which a stdin payload may override).
    pub explicit_root: bool,
    pub robot_mode: bool,
    pub engine: RuleEngine,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (project_root, explicit_root) = match &cli.project_root {
            Some(root) => (root.clone(), true),
            None => find_project_root()?,
        };

        Ok(Self {
            engine: RuleEngine::new(&project_root),
            project_root,
            explicit_root,
            robot_mode: cli.robot,
        })
    }

    /// Point the context (and its engine) at a different project root.
    pub fn reroot(&mut self, project_root: PathBuf) {
        self.engine = RuleEngine::new(&project_root);
        self.project_root = project_root;
    }
}

fn find_project_root() -> Result<(PathBuf, bool)> {
    // Claude Code hooks run with CLAUDE_PROJECT_DIR set.
    if let Ok(root) = std::env::var("CLAUDE_PROJECT_DIR") {
        if !root.is_empty() {
            return Ok((PathBuf::from(root), true));
        }
    }
    Ok((std::env::current_dir()?, false))
}
