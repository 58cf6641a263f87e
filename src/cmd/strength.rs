use clap::Args;
use std::process;
use tracing::error;

use passforge::api;
use passforge::config::GeneratorConfig;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct StrengthArgs {
    #[command(flatten)]
    pub config: GeneratorConfig,

    /// Emit the summary as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Scores the configuration without generating anything. Works for any
/// config, including one with every class disabled: the score formula is
/// total, only generation rejects the empty class set.
pub fn run(args: StrengthArgs, config: GeneratorConfig) {
    let summary = api::strength_summary(&config);

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_strength_report(&config, &summary);
}
