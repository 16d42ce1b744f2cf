//! Custom assertions for bfhl CLI output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Rendered display lines
//! - Display kind
//! - Badge level

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that JSON output rendered exactly these lines.
pub fn assert_display_lines(json: &Value, expected: &[&str]) -> Result<()> {
    let display = &json["content"]["display"];
    let kind = display["kind"]
        .as_str()
        .context("Expected 'content.display.kind' in JSON")?;

    if kind != "lines" {
        anyhow::bail!("Expected display kind 'lines', got '{}'", kind);
    }

    let lines = display["lines"]
        .as_array()
        .context("Expected 'content.display.lines' array in JSON")?;

    let rendered: Vec<String> = lines
        .iter()
        .map(|line| {
            let label = line["label"].as_str().unwrap_or_default();
            let values: Vec<&str> = line["values"]
                .as_array()
                .map(|v| v.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            format!("{}: {}", label, values.join(","))
        })
        .collect();

    if rendered != expected {
        anyhow::bail!("Expected lines {:?}, got {:?}", expected, rendered);
    }

    Ok(())
}

/// Assert the kind of display (`full`, `lines`, `no_data`).
pub fn assert_display_kind(json: &Value, expected: &str) -> Result<()> {
    let kind = json["content"]["display"]["kind"]
        .as_str()
        .context("Expected 'content.display.kind' in JSON")?;

    if kind != expected {
        anyhow::bail!("Expected display kind '{}', got '{}'", expected, kind);
    }

    Ok(())
}

/// Assert the status badge level (`success`, `warning`, ...).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level '{}', got '{}'", expected, level);
    }

    Ok(())
}
