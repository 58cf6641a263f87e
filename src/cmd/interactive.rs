use clap::Args;
use console::{style, Term};
use inquire::{error::InquireError, Confirm, MultiSelect, Select, Text};
use strum::IntoEnumIterator;
use tracing::error;

use passforge::api::ForgeSession;
use passforge::charset::{self, CharClass};
use passforge::config::GeneratorConfig;

use crate::reports;
use crate::ui;

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub config: GeneratorConfig,

    /// Seed for a reproducible session
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

/// Menu-driven toggle/generate/copy loop around a [`ForgeSession`].
pub fn run(args: InteractiveArgs, config: GeneratorConfig) {
    let mut session = match args.seed {
        Some(s) => ForgeSession::with_seed(config, s),
        None => ForgeSession::new(config),
    };
    let term = Term::stdout();

    println!("{}", style("🔐 passforge interactive").bold());
    println!("Random output is fast and seedable, not cryptographically secure.");

    loop {
        print_status(&session);

        let options = vec![
            "🎲  Generate password",
            "📏  Set length",
            "🔤  Toggle character classes",
            "👁  Toggle ambiguous filter",
            "📋  Copy to clipboard",
            "❌  Quit",
        ];

        let choice = match Select::new("Choose an option:", options)
            .with_help_message("Arrow keys to navigate, Enter to select, Esc to quit")
            .prompt()
        {
            Ok(c) => c,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => {
                error!("❌ Prompt failed: {}", e);
                break;
            }
        };

        match choice {
            "🎲  Generate password" => {
                // The session stores either the password or the error
                // message; the status block shows whichever on the next
                // pass.
                let _ = session.generate();
            }
            "📏  Set length" => set_length(&mut session),
            "🔤  Toggle character classes" => toggle_classes(&mut session),
            "👁  Toggle ambiguous filter" => toggle_ambiguous(&mut session),
            "📋  Copy to clipboard" => copy_current(&session, &term),
            _ => break,
        }
    }

    println!("{}", style("Goodbye!").cyan());
}

fn print_status(session: &ForgeSession) {
    let config = session.config();
    let classes: Vec<String> = config
        .enabled_classes()
        .iter()
        .map(|c| c.to_string())
        .collect();

    println!();
    println!(
        "Length {} | Classes: {} | Ambiguous filter: {}",
        config.length,
        if classes.is_empty() {
            "none".to_string()
        } else {
            classes.join(", ")
        },
        if config.exclude_ambiguous { "on" } else { "off" },
    );
    println!("{}", reports::meter_line(&session.strength()));

    if classes.is_empty() {
        println!(
            "{}",
            style("At least one character class must be selected.").red()
        );
    }
    if let Some(pw) = session.password() {
        println!("Password: {}", style(pw).bold());
    }
    if let Some(err) = session.error() {
        println!("{}", style(err).red());
    }
}

fn set_length(session: &mut ForgeSession) {
    let current = session.config().length.to_string();
    if let Ok(input) = Text::new("Password length:").with_default(&current).prompt() {
        match input.trim().parse::<usize>() {
            Ok(len) => session.set_length(len),
            Err(_) => println!("{}", style("Not a number, keeping current length.").yellow()),
        }
    }
}

fn toggle_classes(session: &mut ForgeSession) {
    let all: Vec<CharClass> = CharClass::iter().collect();
    let labels: Vec<&str> = all.iter().map(|c| c.describe()).collect();
    let defaults: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, c)| session.config().includes(**c))
        .map(|(i, _)| i)
        .collect();

    if let Ok(picked) = MultiSelect::new("Included classes:", labels)
        .with_default(&defaults)
        .prompt()
    {
        for class in &all {
            session.set_class(*class, picked.contains(&class.describe()));
        }
    }
}

fn toggle_ambiguous(session: &mut ForgeSession) {
    let on = session.config().exclude_ambiguous;
    let prompt = format!(
        "Exclude ambiguous characters ({})?",
        String::from_utf8_lossy(charset::AMBIGUOUS_SET)
    );
    if let Ok(answer) = Confirm::new(&prompt).with_default(!on).prompt() {
        session.set_exclude_ambiguous(answer);
    }
}

fn copy_current(session: &ForgeSession, term: &Term) {
    // Mirrors the disabled copy button: only a stored, error-free
    // password can be copied.
    if !session.can_copy() {
        println!("{}", style("Nothing to copy yet.").yellow());
        return;
    }
    if let Some(pw) = session.password() {
        match ui::copy_with_auto_clear(pw) {
            Ok(()) => ui::flash_copied_ack(term),
            Err(e) => println!("{}", style(e.to_string()).red()),
        }
    }
}
