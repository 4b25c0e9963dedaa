//! Mirror listing ingestion and the nested package index.
//!
//! A relevant listing line is an absolute path such as
//! `/7.9.2009/os/x86_64/Packages/bash-4.2.46-34.el7.x86_64.rpm`: path
//! segment 1 carries the OS major version as its integer prefix, segment 3
//! the OS architecture, segment 5 the package filename. Lines not ending in
//! `.rpm` are ignored outright. The index keeps, per
//! (major version, OS arch, package arch, package name), the greatest
//! version seen anywhere in the listing.
//!
//! Line parsing is stateless, so it runs on the rayon pool; the keep-max
//! merge is a sequential fold in input order, which keeps ties between
//! equal-comparing version strings on the first-seen spelling.

use crate::package::PackagePatterns;
use crate::utils;
use crate::version;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::{self, BufRead};

/// package name -> best known version, within one package architecture.
pub type PackageVersions = BTreeMap<String, String>;
/// package arch -> packages, within one (major version, OS arch) slice.
pub type ArchBuckets = BTreeMap<String, PackageVersions>;

/// One parsed listing line.
#[derive(Debug, Clone)]
pub struct MirrorEntry {
    pub major_version: u32,
    pub os_arch: String,
    pub package_arch: String,
    pub package_name: String,
    pub version: String,
}

#[derive(Debug, Default, Clone)]
/// Restricts ingestion to one OS major version and/or OS architecture.
pub struct MirrorFilter {
    pub version: Option<u32>,
    pub arch: Option<String>,
}

impl MirrorFilter {
    fn admits(&self, major_version: u32, os_arch: &str) -> bool {
        self.version.map_or(true, |v| v == major_version)
            && self.arch.as_deref().map_or(true, |a| a == os_arch)
    }
}

#[derive(Debug, Default)]
/// Highest known mirror version per (major version, OS arch, package arch,
/// package name). Built once by [`parse_mirror_listing`], read-only after.
pub struct MirrorIndex {
    slices: BTreeMap<u32, BTreeMap<String, ArchBuckets>>,
}

impl MirrorIndex {
    /// Insert an entry, keeping the greater version when the key exists.
    ///
    /// Versions that compare equal keep the first-seen spelling.
    pub fn insert_max(&mut self, entry: MirrorEntry) {
        let packages = self
            .slices
            .entry(entry.major_version)
            .or_default()
            .entry(entry.os_arch)
            .or_default()
            .entry(entry.package_arch)
            .or_default();
        match packages.entry(entry.package_name) {
            Entry::Vacant(slot) => {
                slot.insert(entry.version);
            }
            Entry::Occupied(mut slot) => {
                if version::compare(&entry.version, slot.get()) == Ordering::Greater {
                    slot.insert(entry.version);
                }
            }
        }
    }

    /// The (major version, OS arch) slice, if the mirror carries it.
    pub fn slice(&self, major_version: u32, os_arch: &str) -> Option<&ArchBuckets> {
        self.slices.get(&major_version)?.get(os_arch)
    }
}

/// Build the index from a mirror directory listing.
///
/// Unparseable lines are reported on stderr and skipped; they never abort
/// ingestion. Only a read failure on the underlying stream is an error.
pub fn parse_mirror_listing<R: BufRead>(
    reader: R,
    filter: &MirrorFilter,
    patterns: &PackagePatterns,
) -> io::Result<MirrorIndex> {
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    let entries: Vec<Option<MirrorEntry>> = lines
        .par_iter()
        .map(|line| parse_listing_line(line.trim_end_matches('\r'), filter, patterns))
        .collect();
    let mut index = MirrorIndex::default();
    for entry in entries.into_iter().flatten() {
        index.insert_max(entry);
    }
    Ok(index)
}

fn parse_listing_line(
    line: &str,
    filter: &MirrorFilter,
    patterns: &PackagePatterns,
) -> Option<MirrorEntry> {
    if !line.ends_with(".rpm") {
        return None;
    }
    let segments: Vec<&str> = line.split('/').collect();
    if segments.len() < 6 {
        eprintln!("{} Malformed mirror path - {}", utils::warning_prefix(), line);
        return None;
    }
    let major_version = match segments[1].split('.').next().unwrap_or("").parse::<u32>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!(
                "{} No major version in mirror path - {}",
                utils::warning_prefix(),
                line
            );
            return None;
        }
    };
    let os_arch = segments[3];
    if !filter.admits(major_version, os_arch) {
        return None;
    }
    let identity = match patterns.parse(segments[5]) {
        Some(id) => id,
        None => {
            eprintln!(
                "{} Did not match package patterns - {}",
                utils::warning_prefix(),
                segments[5]
            );
            return None;
        }
    };
    Some(MirrorEntry {
        major_version,
        os_arch: os_arch.to_string(),
        package_arch: identity.arch,
        package_name: identity.name,
        version: identity.version,
    })
}
