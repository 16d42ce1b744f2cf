//! Interactive form tests
//!
//! The form reads commands from stdin; piping a script exercises the same
//! session the terminal user drives.

use anyhow::Result;
use bfhl_testing::assertions::assert_display_lines;
use bfhl_testing::fixtures::classified_response;
use bfhl_testing::{StubServer, TestWorld};
use serde_json::Value;

fn json_stream(stdout: &str) -> Result<Vec<Value>> {
    Ok(serde_json::Deserializer::from_str(stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()?)
}

#[test]
fn test_form_submit_then_apply_filters() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let script = "\
input {\"data\": [\"A\", \"B\", \"1\"]}
filter alphabets
show
submit
apply
quit
";
    let result = world.run_with_stdin(&["form"], script)?;

    assert!(result.success(), "form failed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Filters: alphabets"));
    assert!(stdout.contains("No response yet."));
    assert!(stdout.contains("Response received (3 fields)."));

    // Full dump after submit, filtered lines only after apply
    let full_at = stdout.find("\"alphabets\"").expect("full response shown");
    let filtered_at = stdout.find("Alphabets: A,B").expect("filtered view shown");
    assert!(full_at < filtered_at);

    assert_eq!(server.request_count(), 1);
    Ok(())
}

#[test]
fn test_form_json_replies() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let script = "\
input {\"data\": [\"A\", \"B\", \"1\"]}
submit
filter numbers,alphabets
apply
";
    let result = world.run_with_stdin(&["form", "--format", "json"], script)?;

    assert!(result.success(), "form failed: {}", result.stderr());
    let replies = json_stream(result.stdout())?;
    let events: Vec<&str> = replies
        .iter()
        .filter_map(|reply| reply["content"]["event"].as_str())
        .collect();
    assert_eq!(
        events,
        vec!["input_set", "submitted", "display", "filters_set", "display"]
    );

    let last = replies.last().unwrap();
    assert_display_lines(last, &["Alphabets: A,B", "Numbers: 1"])?;
    Ok(())
}

#[test]
fn test_form_invalid_input_sets_error_and_sends_nothing() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let script = "input not json\nsubmit\nstate\n";
    let result = world.run_with_stdin(&["form", "--format", "json"], script)?;

    assert!(result.success(), "form failed: {}", result.stderr());
    let replies = json_stream(result.stdout())?;
    assert_eq!(replies[1]["content"]["event"], "error");
    assert_eq!(replies[1]["content"]["message"], "Invalid JSON input.");
    assert_eq!(replies[2]["content"]["error"], "Invalid JSON input.");
    assert_eq!(replies[2]["content"]["generations"], 0);
    assert_eq!(server.request_count(), 0);
    Ok(())
}

#[test]
fn test_form_failed_resubmit_keeps_last_response() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());

    let script = "\
input {\"data\": [\"A\", \"B\", \"1\"]}
submit
input {\"data\": 5}
submit
filter alphabets
apply
state
";
    let result = world.run_with_stdin(&["form", "--format", "json"], script)?;

    assert!(result.success(), "form failed: {}", result.stderr());
    let replies = json_stream(result.stdout())?;
    let state = replies.last().unwrap();
    assert_eq!(state["content"]["has_response"], true);
    assert_eq!(state["content"]["filtered"], true);
    assert_eq!(state["content"]["error"], "Invalid JSON input.");

    let display = &replies[replies.len() - 2];
    assert_display_lines(display, &["Alphabets: A,B"])?;
    assert_eq!(server.request_count(), 1);
    Ok(())
}

#[test]
fn test_form_file_commands() -> Result<()> {
    let server = StubServer::json(&classified_response());
    let world = TestWorld::new().with_endpoint(server.url());
    let file = world.write_file("doc.bin", b"hello");

    let script = format!(
        "input {{\"data\": [\"A\"]}}\nfile {}\nfile missing.bin\nsubmit\nclear-file\nsubmit\n",
        file.display()
    );
    let result = world.run_with_stdin(&["form"], &script)?;

    assert!(result.success(), "form failed: {}", result.stderr());
    assert!(result.stdout().contains("(5 bytes)"));
    assert!(result.stdout().contains("Could not read file."));

    // The failed read kept the first file selected
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].json()["file_b64"], "aGVsbG8=");
    assert!(requests[1].json()["file_b64"].is_null());
    Ok(())
}

#[test]
fn test_form_unknown_command_and_bad_filter() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run_with_stdin(&["form"], "send\nfilter vowels\napply\nhelp\n")?;

    assert!(result.success(), "form failed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Unknown command 'send'"));
    assert!(stdout.contains("unknown filter field 'vowels'"));
    assert!(stdout.contains("Nothing to filter yet; submit first."));
    assert!(stdout.contains("clear-file"));
    Ok(())
}
