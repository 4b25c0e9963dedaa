//! Report rendering for audit results.
//!
//! Supports `human` (default) and `json` outputs. Human output is up to
//! three titled, column-aligned tables; a section with no rows is omitted.
//! The JSON form carries the three lists plus a count summary.

use crate::models::AuditResult;
use crate::utils;
use serde_json::{json, Value as JsonVal};

/// Startup banner, printed before human reports.
pub const BANNER: &str = r#"
           ."""-.
          /      \
          |  _..--'-.
          >.`__.-"";"`
         / /(     ^\
         '-`)     =|-.
          /`--.'--'   \ .-.
        .'`-._ `.\    | J /
       /      `--.|   \__/
"#;

/// Print the audit report in the requested format.
pub fn print_audit(result: &AuditResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_audit_json(result)).unwrap()
        ),
        _ => print_human(result),
    }
}

fn print_human(result: &AuditResult) {
    if !result.outdated.is_empty() {
        println!("\n\n{}", utils::title("Outdated Packages:"));
        let rows: Vec<Vec<String>> = result
            .outdated
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    e.arch.clone(),
                    e.installed.clone(),
                    e.available.clone(),
                ]
            })
            .collect();
        print!("{}", render_table(UPDATE_HEADERS, &rows));
    }
    if !result.newer.is_empty() {
        println!("\n\n{}", utils::title("Packages newer than mirror:"));
        let rows: Vec<Vec<String>> = result
            .newer
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    e.arch.clone(),
                    e.installed.clone(),
                    e.available.clone(),
                ]
            })
            .collect();
        print!("{}", render_table(UPDATE_HEADERS, &rows));
    }
    if !result.unofficial.is_empty() {
        println!("\n\n{}", utils::title("Packages not in official mirror:"));
        let rows: Vec<Vec<String>> = result
            .unofficial
            .iter()
            .map(|e| vec![e.name.clone(), e.arch.clone(), e.installed.clone()])
            .collect();
        print!(
            "{}",
            render_table(&["Package Name", "Arch", "Installed Version"], &rows)
        );
    }
}

const UPDATE_HEADERS: &[&str] = &[
    "Package Name",
    "Arch",
    "Installed Version",
    "Latest Mirror Version",
];

/// Render rows under headers: cells joined by `" | "`, a dash rule joined by
/// `"-+-"`, every column sized to the widest of its header and cells.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }
    let pad = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    let mut out = String::new();
    out.push_str(&pad(headers));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&pad(&cells));
        out.push('\n');
    }
    out
}

/// Compose the JSON report object (pure) for testing/snapshot purposes.
pub fn compose_audit_json(result: &AuditResult) -> JsonVal {
    json!({
        "outdated": result.outdated,
        "newer": result.newer,
        "unofficial": result.unofficial,
        "summary": {
            "outdated": result.outdated.len(),
            "newer": result.newer.len(),
            "unofficial": result.unofficial.len(),
        },
    })
}
