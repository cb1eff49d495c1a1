//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod check;
pub mod list;
pub mod prompt;
pub mod show;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Check(args) => check::run(ctx, args),
        Commands::Prompt(args) => prompt::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match skills against a file path (PostToolUse hook)
    Check(check::CheckArgs),

    /// Match skills against a prompt payload read from stdin
    /// (UserPromptSubmit hook)
    Prompt(prompt::PromptArgs),

    /// Show the rule for one skill
    Show(show::ShowArgs),

    /// List all configured skill rules
    List(list::ListArgs),
}
