use clap::Args;
use std::process;
use tracing::{debug, error, info, warn};

use passforge::api;
use passforge::config::GeneratorConfig;
use passforge::generator;
use passforge::verifier;

use crate::reports;
use crate::ui;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: GeneratorConfig,

    /// Number of passwords to produce
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Copy the first password to the clipboard
    #[arg(short = 'c', long, default_value_t = false)]
    pub copy: bool,

    /// Emit a JSON report instead of human output
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, config: GeneratorConfig) {
    let passwords = match generator::generate_batch(&config, args.count, args.seed) {
        Ok(p) => p,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    // The under-length truncate path can drop class coverage; say so.
    for (i, pw) in passwords.iter().enumerate() {
        let audit = verifier::audit_coverage(pw, &config);
        if audit.missing.is_empty() {
            debug!("Password {} covers all {} enabled classes", i + 1, audit.covered.len());
        } else {
            let missing: Vec<String> = audit.missing.iter().map(|c| c.to_string()).collect();
            warn!("⚠️  Password {} misses classes: {}", i + 1, missing.join(", "));
        }
    }

    let report = api::build_report(&config, passwords);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    } else {
        for pw in &report.passwords {
            println!("{}", pw);
        }
        reports::print_strength_meter(&report.strength);
    }

    if args.copy {
        if let Some(first) = report.passwords.first() {
            match ui::copy_to_clipboard(first) {
                Ok(()) => info!("📋 Copied to clipboard"),
                Err(e) => warn!("⚠️  {}", e),
            }
        }
    }
}
