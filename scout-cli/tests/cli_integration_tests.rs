//! Integration tests for the Scout CLI
//!
//! These tests cover argument parsing and run the handlers against temporary
//! files. Commands that would reach a remote service are only exercised up to
//! their credential checks.

use clap::{CommandFactory, Parser};
use scout::config::{ConfigBuilder, LogLevel, ScoutConfig};
use scout::criteria::HardCriteria;
use scout::{ScoutError, artifacts};
use scout_cli::args::{CriteriaArgs, EvaluateArgs, RerankArgs, SearchArgs};
use scout_cli::handlers::{
    handle_criteria_command, handle_evaluate_command, handle_index_command, handle_rerank_command,
    handle_search_command,
};
use scout_cli::{
    Cli, Commands, Outcome, OutputFormat, ScoutCliContext, log_level_override,
    resolve_output_format,
};
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

fn text_context(config: ScoutConfig) -> ScoutCliContext {
    ScoutCliContext::new(config, OutputFormat::Text)
}

fn write_candidates(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("candidates.json");
    artifacts::write_json(
        &path,
        &json!([
            {
                "_id": "b",
                "degree": ["MBA"],
                "country": "United States",
                "experience": ["start_2021::end_2022"],
                "name": "analyst"
            },
            {
                "_id": "a",
                "degree": ["JD"],
                "country": "United States",
                "experience": ["start_2010::end_2020"],
                "name": "tax lawyer"
            }
        ]),
    )
    .unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_rerank_command() {
    let cli = Cli::try_parse_from([
        "scout",
        "rerank",
        "--in",
        "pool.json",
        "--query",
        "senior tax attorney",
        "--config",
        "tax_lawyer.yml",
        "--explain",
        "-vv",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(cli.output.is_none());
    match cli.command {
        Commands::Rerank(args) => {
            assert_eq!(args.input, Path::new("pool.json"));
            assert_eq!(args.query, "senior tax attorney");
            assert_eq!(args.config, "tax_lawyer.yml");
            assert_eq!(args.out, Path::new("top10.json"));
            assert!(args.explain);
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_global_flags_and_defaults() {
    let cli = Cli::try_parse_from([
        "scout",
        "--output",
        "json",
        "search",
        "--query",
        "radiologist",
        "-c",
        "radiology.yml",
        "--submit",
        "--config-file",
        "custom.toml",
    ])
    .unwrap();

    assert_eq!(cli.output, Some(OutputFormat::Json));
    assert_eq!(cli.config_file.as_deref(), Some(Path::new("custom.toml")));
    match cli.command {
        Commands::Search(args) => {
            assert!(args.submit);
            assert!(args.top_k.is_none());
            assert_eq!(args.candidates_out, Path::new("candidates.json"));
        }
        other => panic!("Unexpected command: {:?}", other),
    }

    assert!(Cli::try_parse_from(["scout", "-q", "-v", "index"]).is_err());
    assert!(Cli::try_parse_from(["scout", "embed"]).is_err());
    assert!(Cli::try_parse_from(["scout", "version"]).unwrap().command.is_standalone());
}

#[test]
fn test_output_format_priority() {
    assert_eq!(resolve_output_format(None, None), OutputFormat::Text);
    assert_eq!(resolve_output_format(None, Some("JSON")), OutputFormat::Json);
    assert_eq!(resolve_output_format(None, Some("yaml")), OutputFormat::Text);
    assert_eq!(
        resolve_output_format(Some(OutputFormat::Text), Some("json")),
        OutputFormat::Text
    );
}

#[test]
fn test_log_level_override() {
    assert_eq!(log_level_override(0, false), None);
    assert_eq!(log_level_override(1, false), Some(LogLevel::Debug));
    assert_eq!(log_level_override(3, false), Some(LogLevel::Trace));
    assert_eq!(log_level_override(0, true), Some(LogLevel::Error));
}

#[test]
fn test_rerank_writes_ranking() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_candidates(temp_dir.path());
    let out = temp_dir.path().join("results").join("top10.json");

    let args = RerankArgs {
        input,
        query: "tax lawyer".to_string(),
        config: "tax_lawyer.yml".to_string(),
        out: out.clone(),
        explain: true,
    };
    let outcome = handle_rerank_command(args, &text_context(ScoutConfig::default())).unwrap();

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        read_json(&out),
        json!({"config_path": "tax_lawyer.yml", "object_ids": ["a", "b"]})
    );
}

#[test]
fn test_rerank_honors_configured_top_n_and_profiles() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_candidates(temp_dir.path());
    let out = temp_dir.path().join("top1.json");

    let config = ConfigBuilder::new()
        .with_top_n(1)
        .with_criteria("analysts.yml", HardCriteria::new().with_degree("mba"))
        .build()
        .unwrap();
    let ctx = ScoutCliContext::new(config, OutputFormat::Json);

    let args = RerankArgs {
        input,
        query: "analyst".to_string(),
        config: "analysts.yml".to_string(),
        out: out.clone(),
        explain: false,
    };
    handle_rerank_command(args, &ctx).unwrap();

    assert_eq!(
        read_json(&out),
        json!({"config_path": "analysts.yml", "object_ids": ["b"]})
    );
}

#[test]
fn test_rerank_missing_input_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let args = RerankArgs {
        input: temp_dir.path().join("missing.json"),
        query: "anything".to_string(),
        config: "tax_lawyer.yml".to_string(),
        out: temp_dir.path().join("top10.json"),
        explain: false,
    };

    let err = handle_rerank_command(args, &text_context(ScoutConfig::default())).unwrap_err();
    assert_eq!(err.code(), "IO_ERROR");
    assert!(!temp_dir.path().join("top10.json").exists());
}

#[test]
fn test_criteria_command() {
    let ctx = text_context(ScoutConfig::default());

    let listed = handle_criteria_command(CriteriaArgs { name: None }, &ctx).unwrap();
    assert_eq!(listed, Outcome::Completed);

    let unknown = handle_criteria_command(
        CriteriaArgs {
            name: Some("astronauts.yml".to_string()),
        },
        &ctx,
    )
    .unwrap();
    assert_eq!(unknown, Outcome::Completed);
}

#[tokio::test]
async fn test_evaluate_requires_user_email() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("top10.json");
    artifacts::write_json(&input, &json!(["a", "b"])).unwrap();

    let args = EvaluateArgs {
        config: "tax_lawyer.yml".to_string(),
        input,
    };
    let err = handle_evaluate_command(args, &text_context(ScoutConfig::default()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScoutError::MissingCredential {
            env: "USER_EMAIL",
            ..
        }
    ));
}

#[tokio::test]
async fn test_search_fails_fast_without_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let candidates_out = temp_dir.path().join("candidates.json");

    let args = SearchArgs {
        query: "tax lawyer".to_string(),
        config: "tax_lawyer.yml".to_string(),
        top_k: Some(5),
        candidates_out: candidates_out.clone(),
        out: temp_dir.path().join("top10.json"),
        submit: true,
    };
    let err = handle_search_command(args, &text_context(ScoutConfig::default()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScoutError::MissingCredential {
            env: "VOYAGE_API_KEY",
            ..
        }
    ));
    assert!(!candidates_out.exists());
}

#[test]
fn test_index_command_checks_configuration() {
    let missing = handle_index_command(&text_context(ScoutConfig::default())).unwrap_err();
    assert_eq!(missing.code(), "MISSING_CREDENTIAL");

    let config = ConfigBuilder::new()
        .with_index_api_key("tpuf-test")
        .with_namespace("lawyers")
        .build()
        .unwrap();
    let outcome = handle_index_command(&text_context(config)).unwrap();
    assert_eq!(outcome, Outcome::Completed);
}
