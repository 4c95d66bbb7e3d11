//! Custom assertions over the CLI's JSON output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Row count validation for `list`
//! - Relationship target checks for `list`, `show` and `resolve`

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `list --format json` output contains the expected number of rows.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, rows.len());
    }

    Ok(())
}

/// Assert the display values of a relationship on one `list` row, in order.
pub fn assert_row_relationship(
    json: &Value,
    row: usize,
    relationship: &str,
    expected_displays: &[&str],
) -> Result<()> {
    let targets = json["content"]["rows"][row]["relationships"][relationship]["targets"]
        .as_array()
        .with_context(|| format!("Row {} has no relationship '{}'", row, relationship))?;

    let displays: Vec<&str> = targets
        .iter()
        .map(|t| t["display"].as_str().unwrap_or_default())
        .collect();

    if displays != expected_displays {
        anyhow::bail!(
            "Row {} relationship '{}': expected {:?}, got {:?}",
            row,
            relationship,
            expected_displays,
            displays
        );
    }

    Ok(())
}

/// Assert the `(id, display)` targets of `resolve --format json` output.
pub fn assert_resolved_targets(json: &Value, expected: &[(&str, &str)]) -> Result<()> {
    let targets = json["content"]["targets"]
        .as_array()
        .context("Expected 'content.targets' array in JSON")?;

    let actual: Vec<(&str, &str)> = targets
        .iter()
        .map(|t| {
            (
                t["id"].as_str().unwrap_or_default(),
                t["display"].as_str().unwrap_or_default(),
            )
        })
        .collect();

    if actual != expected {
        anyhow::bail!("Expected targets {:?}, got {:?}", expected, actual);
    }

    Ok(())
}
