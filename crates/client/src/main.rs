//! `magic-count` binary.
//!
//! Loads a content directory, sets every character up and runs one command
//! against the result. Nothing is written back; each invocation starts from
//! freshly set-up characters.
//!
//! ```bash
//! magic-count ledger 1
//! magic-count cast 1 10 -n 3 --format json
//! magic-count script demo.script --content-dir content
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Cast, Coords, Ledger, LevelUp, Menu, Recover, Script};
use magic_client::{ClientConfig, OutputFormat, diagnostics};

/// Usage-count inspector
#[derive(Parser)]
#[command(name = "magic-count")]
#[command(about = "Inspect and exercise magic usage counts", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides MAGIC_CONTENT_DIR)
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Output format (overrides MAGIC_OUTPUT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the skill-id layout of the coordinate grid
    Coords(Coords),

    /// Show usage counts
    Ledger(Ledger),

    /// Cast a skill
    Cast(Cast),

    /// Level an actor up
    LevelUp(LevelUp),

    /// Restore usage counts (GR_MagicRecover)
    Recover(Recover),

    /// Open a skill category
    Menu(Menu),

    /// Run a script of steps
    Script(Script),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MAGIC_CONTENT_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_overrides(cli.content_dir, cli.format);
    tracing::debug!(content_dir = %config.content_dir.display(), format = %config.format, "client configured");

    let result = match cli.command {
        Command::Coords(cmd) => cmd.execute(&config),
        Command::Ledger(cmd) => cmd.execute(&config),
        Command::Cast(cmd) => cmd.execute(&config),
        Command::LevelUp(cmd) => cmd.execute(&config),
        Command::Recover(cmd) => cmd.execute(&config),
        Command::Menu(cmd) => cmd.execute(&config),
        Command::Script(cmd) => cmd.execute(&config),
    };

    if let Some((code, severity)) = result.as_ref().err().and_then(diagnostics::classify) {
        tracing::error!(code, %severity, "command failed");
    }
    result
}
