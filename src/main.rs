// ===== passforge/src/main.rs =====
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info};

use passforge::config::GeneratorConfig;

mod cmd;
mod reports;
mod ui;

const LONG_ABOUT: &str = "\
passforge builds random passwords from configurable character classes and
scores each configuration with a heuristic strength meter.

Randomness comes from a fast, seedable PRNG that is NOT cryptographically
secure. Seeded runs reproduce exactly; do not use the output where an
attacker-resistant entropy source is required.";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Random password generator with a strength meter",
    long_about = LONG_ABOUT
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON profile with generator settings
    #[arg(global = true, short, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one or more passwords
    Generate(cmd::generate::GenerateArgs),
    /// Inspect the strength of a configuration without generating
    Strength(cmd::strength::StrengthArgs),
    /// Menu-driven toggle/generate/copy loop
    Interactive(cmd::interactive::InteractiveArgs),
}

fn main() {
    // 1. Parse raw matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();

    // 2. Construct CLI struct (populated with defaults)
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so piped passwords and JSON stay clean.
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // 3. Extract the CLI-provided config AND the matches for the active
    // subcommand. Config flags live inside the subcommand's matches, not
    // the root.
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Generate(args) => (
            &args.config,
            matches.subcommand_matches("generate").unwrap(),
        ),
        Commands::Strength(args) => (
            &args.config,
            matches.subcommand_matches("strength").unwrap(),
        ),
        Commands::Interactive(args) => (
            &args.config,
            matches.subcommand_matches("interactive").unwrap(),
        ),
    };

    // 4. Resolve the config: JSON profile as the base, explicit CLI flags
    // overlaid on top.
    let config = if let Some(path) = &cli.profile {
        info!("⚖️  Loading profile from: {}", path);

        let mut file_config = match GeneratorConfig::load_from_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!("❌ Failed to load profile: {}", e);
                process::exit(1);
            }
        };
        file_config.merge_from_cli(cli_config, sub_matches);
        file_config
    } else {
        cli_config.clone()
    };

    // 5. Execute
    match cli.command {
        Commands::Generate(args) => cmd::generate::run(args, config),
        Commands::Strength(args) => cmd::strength::run(args, config),
        Commands::Interactive(args) => cmd::interactive::run(args, config),
    }
}
