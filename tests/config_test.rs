use clap::{CommandFactory, FromArgMatches, Parser};
use passforge::charset::CharClass;
use passforge::config::{GeneratorConfig, UnderLengthPolicy};
use passforge::error::PassForgeError;
use std::fs;

// Wraps the flattened args the way the real CLI does, so merge behaviour
// can be driven without spawning the binary.
#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: GeneratorConfig,
}

fn parse(args: &[&str]) -> (GeneratorConfig, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args.iter().copied());
    let cli = TestCli::from_arg_matches(&matches).expect("args should parse");
    (cli.config, matches)
}

#[test]
fn test_defaults_match_initial_widget_state() {
    let config = GeneratorConfig::default();
    assert_eq!(config.length, 12);
    assert!(config.uppercase);
    assert!(config.lowercase);
    assert!(config.digits);
    assert!(config.symbols);
    assert!(!config.exclude_ambiguous);
    assert_eq!(config.underlength, UnderLengthPolicy::Truncate);
}

#[test]
fn test_enabled_classes_keep_canonical_order() {
    let config = GeneratorConfig::default();
    assert_eq!(
        config.enabled_classes(),
        vec![
            CharClass::Uppercase,
            CharClass::Lowercase,
            CharClass::Digit,
            CharClass::Symbol
        ]
    );

    let partial = GeneratorConfig {
        uppercase: false,
        digits: false,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        partial.enabled_classes(),
        vec![CharClass::Lowercase, CharClass::Symbol]
    );
}

#[test]
fn test_validate_reports_class_error_before_length() {
    let both_bad = GeneratorConfig {
        length: 0,
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        both_bad.validate(),
        Err(PassForgeError::NoClassSelected)
    ));

    let zero_length = GeneratorConfig {
        length: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        zero_length.validate(),
        Err(PassForgeError::InvalidLength(0))
    ));

    assert!(GeneratorConfig::default().validate().is_ok());
}

// --- CLI PARSING TESTS ---

#[test]
fn test_negative_flags_disable_classes() {
    let (config, _) = parse(&["passforge", "--no-uppercase", "--no-symbols"]);
    assert!(!config.uppercase);
    assert!(config.lowercase);
    assert!(config.digits);
    assert!(!config.symbols);
}

#[test]
fn test_policy_parses_from_cli_name() {
    let (config, _) = parse(&["passforge", "--underlength", "reject"]);
    assert_eq!(config.underlength, UnderLengthPolicy::Reject);
}

// --- PROFILE TESTS ---

#[test]
fn test_profile_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    let saved = GeneratorConfig {
        length: 20,
        symbols: false,
        exclude_ambiguous: true,
        ..GeneratorConfig::default()
    };
    fs::write(&path, serde_json::to_string_pretty(&saved).unwrap()).unwrap();

    let loaded = GeneratorConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.length, 20);
    assert!(!loaded.symbols);
    assert!(loaded.exclude_ambiguous);
    assert_eq!(loaded.underlength, UnderLengthPolicy::Truncate);
}

#[test]
fn test_partial_profile_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.json");
    fs::write(&path, r#"{ "length": 30 }"#).unwrap();

    let loaded = GeneratorConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.length, 30);
    assert!(loaded.uppercase && loaded.lowercase && loaded.digits && loaded.symbols);
    assert_eq!(loaded.underlength, UnderLengthPolicy::Truncate);
}

#[test]
fn test_profile_accepts_policy_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reject.json");
    fs::write(&path, r#"{ "underlength": "reject" }"#).unwrap();

    let loaded = GeneratorConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.underlength, UnderLengthPolicy::Reject);
}

#[test]
fn test_garbage_profile_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "length: 30").unwrap();

    let err = GeneratorConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, PassForgeError::Json(_)));
}

#[test]
fn test_missing_profile_is_an_io_error() {
    let err = GeneratorConfig::load_from_file("/no/such/profile.json").unwrap_err();
    assert!(matches!(err, PassForgeError::Io(_)));
}

// --- MERGE PRECEDENCE TESTS ---

#[test]
fn test_cli_flags_override_profile_values() {
    let mut profile = GeneratorConfig {
        length: 20,
        digits: false,
        ..GeneratorConfig::default()
    };
    let (cli, matches) = parse(&["passforge", "--length", "8", "--no-symbols"]);

    profile.merge_from_cli(&cli, &matches);
    assert_eq!(profile.length, 8); // Explicit flag wins
    assert!(!profile.symbols); // Explicit flag wins
    assert!(!profile.digits); // Profile survives, flag not passed
    assert!(profile.uppercase);
}

#[test]
fn test_untouched_flags_keep_profile_values() {
    let mut profile = GeneratorConfig {
        length: 20,
        digits: false,
        underlength: UnderLengthPolicy::Reject,
        ..GeneratorConfig::default()
    };
    let (cli, matches) = parse(&["passforge"]);

    profile.merge_from_cli(&cli, &matches);
    assert_eq!(profile.length, 20);
    assert!(!profile.digits);
    assert_eq!(profile.underlength, UnderLengthPolicy::Reject);
}
