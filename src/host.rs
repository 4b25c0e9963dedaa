//! Host report ingestion.
//!
//! A report is one package filename per line, optionally preceded by a
//! metadata line of the form `<hostname> <arch> <os version words...>`.

use crate::models::UnofficialEntry;
use crate::package::PackagePatterns;
use std::collections::BTreeMap;
use std::io::{self, BufRead};

#[derive(Debug, Default)]
/// Installed packages reported by a single host.
pub struct HostInventory {
    pub hostname: Option<String>,
    pub arch: Option<String>,
    pub os_version: Option<String>,
    /// package arch -> package name -> installed version.
    pub rpms: BTreeMap<String, BTreeMap<String, String>>,
    /// Lines no rule recognized, in input order.
    pub misc: Vec<UnofficialEntry>,
}

/// Parse a host report.
///
/// The first line is metadata when it has more than two whitespace fields:
/// hostname, OS architecture, then the remaining fields joined as the OS
/// version string. Otherwise it is treated as a package line like the rest.
/// Duplicate (arch, name) pairs keep the last version seen; no version
/// comparison happens at ingestion.
pub fn parse_host_report<R: BufRead>(
    reader: R,
    patterns: &PackagePatterns,
) -> io::Result<HostInventory> {
    let mut inventory = HostInventory::default();
    let mut lines = reader.lines();
    if let Some(first) = lines.next() {
        let first = first?;
        let first = first.trim_end_matches('\r');
        let fields: Vec<&str> = first.split_whitespace().collect();
        if fields.len() > 2 {
            inventory.hostname = Some(fields[0].to_string());
            inventory.arch = Some(fields[1].to_string());
            inventory.os_version = Some(fields[2..].join(" "));
        } else {
            ingest_package_line(&mut inventory, first, patterns);
        }
    }
    for line in lines {
        let line = line?;
        ingest_package_line(&mut inventory, line.trim_end_matches('\r'), patterns);
    }
    Ok(inventory)
}

fn ingest_package_line(inventory: &mut HostInventory, line: &str, patterns: &PackagePatterns) {
    match patterns.parse(line) {
        Some(identity) => {
            inventory
                .rpms
                .entry(identity.arch)
                .or_default()
                .insert(identity.name, identity.version);
        }
        None => inventory.misc.push(UnofficialEntry {
            name: line.to_string(),
            arch: "Unknown".to_string(),
            installed: "Unknown".to_string(),
        }),
    }
}
