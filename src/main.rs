use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use promptsmith::cli;

#[derive(Parser)]
#[command(name = "promptsmith", version)]
#[command(about = "Generate randomized creative prompts", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more prompts
    Generate {
        /// Category (writing, aiArt, blog, fantasy, persuasive, names). Defaults to config.
        category: Option<String>,

        /// Number of prompts (ignored by names; use --names-count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// The `type` control: name format (full, first, title, house) or
        /// persuasive source (topics, titles, all)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Name culture (elvish, dwarven, human, exotic, any)
        #[arg(long)]
        origin: Option<String>,

        /// Names per request: single, multiple (5), batch (10)
        #[arg(long)]
        names_count: Option<String>,

        /// Extra control as key=value (repeatable)
        #[arg(short = 'c', long = "control")]
        controls: Vec<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print prompts as JSON
        #[arg(long)]
        json: bool,

        /// Path to config file (defaults to ./promptsmith.toml or ~/.config/promptsmith/config.toml)
        #[arg(long)]
        config: Option<String>,
    },

    /// List available categories
    Categories {
        #[arg(long)]
        config: Option<String>,
    },

    /// Check the template store (built-in plus overlay) for authoring mistakes
    Check {
        #[arg(long)]
        config: Option<String>,
    },

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            category,
            count,
            kind,
            origin,
            names_count,
            controls,
            seed,
            json,
            config,
        } => cli::generate::run(
            category,
            count,
            kind,
            origin,
            names_count,
            controls,
            seed,
            json,
            config,
        )?,
        Commands::Categories { config } => cli::categories::run(config)?,
        Commands::Check { config } => cli::check::run(config)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "promptsmith", &mut io::stdout());
        }
    }

    Ok(())
}
