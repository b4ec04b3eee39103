//! Behavioural coverage for argument-vector scanning: token forms,
//! clusters, separators and the failure modes that halt a parse.

use anyhow::{Result, ensure};
use flat_config::{Config, ConfigError, OptionDef, Value};
use rstest::rstest;

fn sample() -> Config {
    Config::new([
        OptionDef::flag("verbose,v", "emit progress details"),
        OptionDef::int("port,p", "listen port"),
        OptionDef::text("extract,x", "member to extract"),
        OptionDef::path("output,o", "destination file"),
    ])
}

#[rstest]
#[case::separate_tokens(vec!["tool", "-v", "-v"])]
#[case::clustered(vec!["tool", "-vv"])]
#[case::mixed(vec!["tool", "-v", "--verbose"])]
fn repeated_flags_accumulate(#[case] argv: Vec<&str>) -> Result<()> {
    let mut config = sample();
    config.parse(argv, false)?;
    ensure!(config.count("verbose") == 2, "two matches expected");
    Ok(())
}

#[rstest]
#[case::inline(vec!["tool", "--port=8080"])]
#[case::next_slot(vec!["tool", "--port", "8080"])]
#[case::short_remainder(vec!["tool", "-p8080"])]
#[case::short_next_slot(vec!["tool", "-p", "8080"])]
fn valued_options_take_their_argument_in_any_form(#[case] argv: Vec<&str>) -> Result<()> {
    let mut config = sample();
    config.parse(argv, false)?;
    ensure!(config.get::<i64>("port")? == 8080, "port should be 8080");
    Ok(())
}

#[test]
fn separate_flags_count_independently() {
    let mut config = Config::new([
        OptionDef::flag("a", "first flag"),
        OptionDef::flag("b", "second flag"),
    ]);
    config.parse(["prog", "-a", "-b"], false).expect("parse succeeds");
    assert_eq!(config.count("a"), 1);
    assert_eq!(config.count("b"), 1);
    assert!(config.operands().is_empty());
}

#[test]
fn a_cluster_remainder_is_stored_verbatim_for_text_options() {
    let mut config = sample();
    config.parse(["prog", "-xfoo"], false).expect("parse succeeds");
    assert_eq!(config.get::<String>("extract").expect("extract is set"), "foo");
}

#[test]
fn cluster_flags_run_up_to_the_first_valued_option() {
    let mut config = sample();
    config
        .parse(["tool", "-vvx", "member.txt"], false)
        .expect("parse succeeds");
    assert_eq!(config.count("verbose"), 2);
    assert_eq!(
        config.get::<String>("extract").expect("extract is set"),
        "member.txt"
    );
}

#[test]
fn back_to_back_clusters_resolve_their_arguments_independently() {
    let mut config = sample();
    config
        .parse(["tool", "-vxleft", "-vp", "8080", "right"], false)
        .expect("parse succeeds");
    assert_eq!(config.count("verbose"), 2);
    assert_eq!(config.get::<String>("extract").expect("extract is set"), "left");
    assert_eq!(config.get::<i64>("port").expect("port is set"), 8080);
    assert_eq!(config.operands(), ["right"]);
}

#[test]
fn operands_interleave_with_options() {
    let mut config = sample();
    config
        .parse(["cp", "first", "--verbose", "second"], false)
        .expect("parse succeeds");
    assert_eq!(config.operands(), ["first", "second"]);
    assert_eq!(config.count("verbose"), 1);
}

#[test]
fn the_separator_ends_option_scanning() {
    let mut config = sample();
    config
        .parse(["tool", "-v", "--", "--port=1", "-x"], false)
        .expect("parse succeeds");
    assert_eq!(config.operands(), ["--port=1", "-x"]);
    assert_eq!(config.count("verbose"), 1);
    assert_eq!(config.count("port"), 0);
}

#[test]
fn unknown_long_options_fail_the_parse() {
    let mut config = sample();
    let error = config
        .parse(["tool", "--prot", "-v"], false)
        .expect_err("prot is unknown");
    assert!(matches!(
        error,
        ConfigError::UnknownOption { option } if option == "prot"
    ));
    assert_eq!(config.count("verbose"), 0, "scan halts at the error");
}

#[test]
fn unknown_options_can_be_tolerated() {
    let mut config = sample();
    config
        .parse(["tool", "--prot", "-q", "-v"], true)
        .expect("unknown options are dropped");
    assert_eq!(config.count("verbose"), 1);
    assert!(config.operands().is_empty(), "dropped tokens are not operands");
    assert!(!config.has("prot"));
}

#[test]
fn a_matched_prefix_survives_a_failed_parse() {
    let mut config = sample();
    let error = config
        .parse(["tool", "-v", "--port=80", "--nope", "more"], false)
        .expect_err("nope is unknown");
    assert!(matches!(error, ConfigError::UnknownOption { .. }));
    assert_eq!(config.count("verbose"), 1);
    assert_eq!(config.get::<i64>("port").expect("port kept"), 80);
    assert!(config.operands().is_empty(), "later tokens stay unscanned");
}

#[rstest]
#[case::long_alone(vec!["tool", "--port"])]
#[case::short_at_cluster_end(vec!["tool", "-vp"])]
#[case::empty_next_slot(vec!["tool", "--port", ""])]
fn a_valued_option_without_argument_is_missing(#[case] argv: Vec<&str>) {
    let mut config = sample();
    let error = config.parse(argv, false).expect_err("no argument available");
    assert!(matches!(
        error,
        ConfigError::MissingArgument { option } if option == "port"
    ));
}

#[test]
fn conversion_failures_name_the_token() {
    let mut config = sample();
    let error = config
        .parse(["tool", "--port", "eight"], false)
        .expect_err("not a number");
    match error {
        ConfigError::InvalidArgument {
            option, argument, ..
        } => {
            assert_eq!(option, "port");
            assert_eq!(argument, "eight");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn flags_reject_inline_arguments_without_counting() {
    let mut config = sample();
    let error = config
        .parse(["tool", "--verbose=yes"], false)
        .expect_err("flags take no argument");
    assert!(matches!(
        error,
        ConfigError::DoesNotAcceptArgument { option } if option == "verbose"
    ));
    assert_eq!(config.count("verbose"), 0);
}

#[test]
fn an_empty_inline_argument_counts_as_absent() {
    let mut config = sample();
    config
        .parse(["tool", "--verbose="], false)
        .expect("an empty inline argument is no argument");
    assert_eq!(config.count("verbose"), 1);

    let mut config = sample();
    config
        .parse(["tool", "--port=", "8080"], false)
        .expect("the next slot still serves as the argument");
    assert_eq!(config.get::<i64>("port").expect("port is set"), 8080);
}

#[test]
fn argument_slots_are_consumed_without_classification() {
    let mut config = sample();
    config
        .parse(["tool", "--extract", "--verbose"], false)
        .expect("the next slot is taken verbatim");
    assert_eq!(
        config.value("extract").expect("extract is set"),
        &Value::Text("--verbose".into())
    );
    assert_eq!(config.count("verbose"), 0);
}

#[test]
fn cluster_errors_do_not_stop_the_cluster() {
    let mut config = sample();
    let error = config
        .parse(["tool", "-qvp", "8080"], false)
        .expect_err("q is unknown");
    assert!(matches!(
        error,
        ConfigError::UnknownOption { option } if option == "q"
    ));
    assert_eq!(config.count("verbose"), 1, "later characters still match");
    assert_eq!(
        config.get::<i64>("port").expect("argument still resolved"),
        8080
    );
}

#[test]
fn tolerated_cluster_unknowns_do_not_detach_the_argument() {
    let mut config = sample();
    config
        .parse(["tool", "-qvx", "data"], true)
        .expect("q is dropped");
    assert_eq!(config.count("verbose"), 1);
    assert_eq!(config.get::<String>("extract").expect("extract is set"), "data");
}

#[test]
fn long_lookups_do_not_fall_back_to_short_aliases() {
    let mut config = Config::new([OptionDef::flag("v", "short-only")]);
    let error = config
        .parse(["tool", "--v"], false)
        .expect_err("no long name registered");
    assert!(matches!(error, ConfigError::UnknownOption { .. }));

    let mut config = Config::new([OptionDef::flag("v", "short-only")]);
    config.parse(["tool", "-v"], false).expect("short form works");
    assert_eq!(config.count("v"), 1);
}

#[test]
fn a_lone_dash_matches_nothing() {
    let mut config = sample();
    config
        .parse(["tool", "-", "file"], false)
        .expect("an empty cluster is a no-op");
    assert_eq!(config.operands(), ["file"]);
}

#[test]
fn a_bare_program_name_parses_cleanly() {
    let mut config = sample();
    config.parse(["tool"], false).expect("nothing to scan");
    assert!(config.operands().is_empty());
    assert_eq!(config.count("verbose"), 0);
}
