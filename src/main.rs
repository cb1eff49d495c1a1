//! skillhook - suggest Claude Code skills for file paths and prompts.
//!
//! Thin binary over the rule engine; intended to be wired into Claude Code
//! hooks (`check` for PostToolUse, `prompt` for UserPromptSubmit).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillhook::HookError;
use skillhook::Result;
use skillhook::app::AppContext;
use skillhook::cli::Cli;
use skillhook::cli::output::robot_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.robot {
                let code = match &e {
                    HookError::InvalidInput(_) => "invalid_input",
                    HookError::UnknownSkill(_) => "unknown_skill",
                    _ => "error",
                };
                let payload = robot_error(code, e.to_string());
                println!("{}", serde_json::to_string(&payload).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut ctx = AppContext::from_cli(cli)?;
    skillhook::cli::commands::run(&mut ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,skillhook=debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Stdout belongs to the hook protocol; all diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
