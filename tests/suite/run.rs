//! End-to-end runs against an in-memory console

use serde_json::json;
use specimen_config::RunSettings;
use specimen_engine::{
    DEFAULT_ARGS, MALFORMED_INPUT, MemoryConsole, State, attempt_parse, fake_api_call,
};
use specimen_types::{ParseError, parse_structured};

use crate::common::{TAG, capturing_runner, fast_settings};

#[tokio::test]
async fn fixed_run_returns_stopped() {
    let (runner, console) = capturing_runner(fast_settings());
    let state = runner.invoke(&DEFAULT_ARGS).await.unwrap();

    assert_eq!(state, State::Stopped);
    assert_eq!(state.code(), 2);
    assert_eq!(
        console.texts().last().map(String::as_str),
        Some("final state = 2")
    );
}

#[tokio::test]
async fn every_line_carries_the_tag() {
    let (runner, console) = capturing_runner(fast_settings());
    runner.init();
    runner.invoke(&DEFAULT_ARGS).await.unwrap();

    let prefix = format!("[{TAG}] ");
    let lines = console.lines();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.starts_with(&prefix)));
    assert_eq!(lines[0], format!("{prefix}initializing module"));
}

#[tokio::test]
async fn custom_tag_is_used() {
    let settings = RunSettings {
        tag: "Demo".to_string(),
        ..fast_settings()
    };
    let (runner, console) = capturing_runner(settings);
    runner.invoke(&DEFAULT_ARGS).await.unwrap();

    assert!(console.lines().iter().all(|line| line.starts_with("[Demo] ")));
}

#[tokio::test]
async fn cleanup_runs_exactly_once_per_run() {
    let (runner, console) = capturing_runner(fast_settings());
    runner.invoke(&DEFAULT_ARGS).await.unwrap();

    assert_eq!(console.count("cleanup done"), 1);
    let texts = console.texts();
    let caught = texts
        .iter()
        .position(|t| t.starts_with("caught error: "))
        .expect("caught error line");
    assert_eq!(texts[caught + 1], "cleanup done");
}

#[tokio::test]
async fn report_captures_sequence_values() {
    let (runner, _console) = capturing_runner(fast_settings());
    let report = runner.run_report(&DEFAULT_ARGS).await.unwrap();

    assert_eq!(report.doubled, vec![0, 8, 32, 72, 128]);
    assert_eq!(report.first, report.doubled.first().copied());
    assert_eq!(report.rest, report.doubled[1..].to_vec());
    assert_eq!(report.members.len(), report.rest.len());
    for v in &report.members {
        assert_eq!(report.squared[v].squared, v * v);
    }
    assert_eq!(report.response.data, json!({"count": report.members.len()}));
}

#[tokio::test]
async fn smaller_sequence_from_settings() {
    let settings = RunSettings {
        max_items: 5,
        ..fast_settings()
    };
    let (runner, _console) = capturing_runner(settings);
    let report = runner.run_report(&DEFAULT_ARGS).await.unwrap();

    // squares 0,1,4,9,16 -> evens 0,4,16 -> doubled 0,8,32
    assert_eq!(report.doubled, vec![0, 8, 32]);
    assert_eq!(report.rest, vec![8, 32]);
    assert_eq!(report.response.data, json!({"count": 2}));
}

#[tokio::test]
async fn fetch_echoes_count_payload() {
    let response = fake_api_call(json!({"count": 3}), std::time::Duration::ZERO).await;
    assert!(response.ok);
    assert_eq!(response.data, json!({"count": 3}));
}

#[test]
fn malformed_input_always_fails() {
    for _ in 0..3 {
        let err: ParseError = parse_structured(MALFORMED_INPUT).unwrap_err();
        assert_eq!(err.line(), 1);
    }
}

#[test]
fn attempt_parse_reports_error_then_cleanup() {
    let console = MemoryConsole::new(TAG);
    let err = attempt_parse(&console, MALFORMED_INPUT).unwrap_err();

    assert_eq!(
        console.texts(),
        vec![
            format!("caught error: {}", err.message()),
            "cleanup done".to_string()
        ]
    );
    assert!(!console.texts()[0].contains(" at line "));
}
