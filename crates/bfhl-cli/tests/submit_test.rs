//! One-shot submission tests
//!
//! Drive `bfhl submit` against a local stub service and check what reaches
//! the service and what gets rendered.

use anyhow::Result;
use bfhl_testing::assertions::{assert_badge_level, assert_display_kind, assert_display_lines};
use bfhl_testing::fixtures::{
    SAMPLE_INPUT, classified_response, full_service_response, service_failure_response,
};
use bfhl_testing::{StubServer, TestWorld};
use serde_json::json;

#[test]
fn test_submit_alphabets_only() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT, "--filter", "alphabets"])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert!(result.stdout().contains("Alphabets: A,B"));
    assert!(!result.stdout().contains("Numbers:"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/bfhl");
    assert_eq!(
        requests[0].json(),
        json!({"data": ["A", "B", "1"], "file_b64": null})
    );
    Ok(())
}

#[test]
fn test_submit_all_filters_skips_empty_fields() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&[
        "submit",
        "--input",
        SAMPLE_INPUT,
        "--filter",
        "alphabets,numbers,highest_lowercase_alphabet",
        "--format",
        "json",
    ])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    let json = result.json()?;
    assert_display_lines(&json, &["Alphabets: A,B", "Numbers: 1"])?;
    assert_badge_level(&json, "success")?;
    assert_eq!(
        json["content"]["filters"],
        json!(["alphabets", "numbers", "highest_lowercase_alphabet"])
    );
    assert_eq!(json["content"]["request"]["items"], 3);
    Ok(())
}

#[test]
fn test_submit_without_filters_shows_full_response() -> Result<()> {
    let server = StubServer::json(&full_service_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT, "--format", "json"])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    let json = result.json()?;
    assert_display_kind(&json, "full")?;

    let dumped = json["content"]["display"]["json"].as_str().unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(dumped)?;
    assert_eq!(reparsed, full_service_response());
    assert!(
        dumped.find("\"user_id\"").unwrap() < dumped.find("\"file_size_kb\"").unwrap(),
        "server field order should be preserved"
    );
    Ok(())
}

#[test]
fn test_submit_no_data_message() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&[
        "submit",
        "--input",
        SAMPLE_INPUT,
        "--filter",
        "highest_lowercase_alphabet",
    ])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert!(
        result
            .stdout()
            .contains("No data available for the selected filters.")
    );
    Ok(())
}

#[test]
fn test_submit_uses_default_filters_from_config() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_config(&format!(
        "endpoint = \"{}\"\ndefault_filters = [\"numbers\"]\n",
        server.url()
    ));

    let result = world.run(&["submit", "--input", SAMPLE_INPUT, "--format", "json"])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert_display_lines(&result.json()?, &["Numbers: 1"])?;
    Ok(())
}

#[test]
fn test_submit_reads_input_from_stdin_and_file() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let from_stdin = world.run_with_stdin(&["submit", "--filter", "numbers"], SAMPLE_INPUT)?;
    assert!(from_stdin.success(), "stdin submit failed: {}", from_stdin.stderr());
    assert!(from_stdin.stdout().contains("Numbers: 1"));

    let input_path = world.write_file("input.json", SAMPLE_INPUT.as_bytes());
    let from_file = world.run(&[
        "submit",
        "--input-file",
        input_path.to_str().unwrap(),
        "--filter",
        "numbers",
    ])?;
    assert!(from_file.success(), "file submit failed: {}", from_file.stderr());

    assert_eq!(server.request_count(), 2);
    Ok(())
}

#[test]
fn test_submit_with_file_sends_base64() -> Result<()> {
    let server = StubServer::json(&full_service_response());
    let world = TestWorld::new().with_endpoint(server.url());
    let file = world.write_file("pic.png", &[0x89, b'P', b'N', b'G']);

    let result = world.run(&[
        "submit",
        "--input",
        SAMPLE_INPUT,
        "--file",
        file.to_str().unwrap(),
        "--format",
        "json",
    ])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert_eq!(server.requests()[0].json()["file_b64"], "iVBORw==");
    assert_eq!(result.json()?["content"]["request"]["file_bytes"], 4);
    Ok(())
}

#[test]
fn test_invalid_json_is_rejected_before_sending() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    for input in ["not json", "[1, 2]", r#"{"items": []}"#] {
        let result = world.run(&["submit", "--input", input])?;

        assert!(!result.success(), "'{}' should be rejected", input);
        assert!(
            result.stderr().contains("Error: Invalid JSON input."),
            "stderr: {}",
            result.stderr()
        );
    }

    assert_eq!(server.request_count(), 0);
    Ok(())
}

#[test]
fn test_unreadable_file_is_reported() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT, "--file", "missing.png"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Error: Could not read file."));
    assert_eq!(server.request_count(), 0);
    Ok(())
}

#[test]
fn test_server_error_is_request_failed() -> Result<()> {
    let server = StubServer::start(500, r#"{"detail": "boom"}"#);
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT])?;

    assert!(!result.success());
    assert!(
        result.stderr().contains("Error: Request failed."),
        "stderr: {}",
        result.stderr()
    );
    assert_eq!(server.request_count(), 1);
    Ok(())
}

#[test]
fn test_non_object_body_is_request_failed() -> Result<()> {
    let server = StubServer::start(200, "[1, 2, 3]");
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Error: Request failed."));
    Ok(())
}

#[test]
fn test_service_reported_failure_is_a_warning() -> Result<()> {
    let server = StubServer::json(&service_failure_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT, "--format", "json"])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert_badge_level(&result.json()?, "warning")?;
    Ok(())
}

#[test]
fn test_endpoint_flag_overrides_config() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint("http://127.0.0.1:1/bfhl");

    let result = world.run(&[
        "submit",
        "--input",
        SAMPLE_INPUT,
        "--endpoint",
        server.url(),
        "--filter",
        "alphabets",
    ])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert_eq!(server.request_count(), 1);
    Ok(())
}

#[test]
fn test_endpoint_env_overrides_config() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new()
        .with_endpoint("http://127.0.0.1:1/bfhl")
        .with_env("BFHL_ENDPOINT", server.url());

    let result = world.run(&["submit", "--input", SAMPLE_INPUT])?;

    assert!(result.success(), "submit failed: {}", result.stderr());
    assert_eq!(server.request_count(), 1);
    Ok(())
}
