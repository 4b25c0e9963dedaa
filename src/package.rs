//! Package filename identity extraction.
//!
//! A package token such as `bash-4.2.46-34.el7.x86_64.rpm` decomposes into a
//! name, a version, and an architecture. Two rules are applied in order: the
//! primary rule restricts versions to digits, dots, and hyphens; the fallback
//! also admits embedded letters (`2021e-1`) for pre-release style versions.
//! Platform-release tags (`.el7`, `.el7_9`, possibly repeated) are matched
//! and discarded so they never reach version comparison. The architecture is
//! the final dot-separated segment before an optional `.rpm` suffix.

use regex::Regex;

/// A parsed (name, version, architecture) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    pub name: String,
    pub version: String,
    pub arch: String,
}

/// The two filename rules, compiled once and shared by both ingestion paths.
pub struct PackagePatterns {
    primary: Regex,
    fallback: Regex,
}

impl PackagePatterns {
    pub fn new() -> Self {
        Self {
            primary: Regex::new(r"^(\S+?)-+(\d[\d.-]+)(?:\.el\d(?:_\d+)?)*\.([^.]+)(?:\.rpm|$)")
                .expect("bad package pattern"),
            fallback: Regex::new(r"^(\S+?)-+(\d[\w.-]+?)(?:\.el\d(?:_\d+)?)*\.([^.]+)(?:\.rpm|$)")
                .expect("bad package pattern"),
        }
    }

    /// Extract an identity from a filename-like token.
    ///
    /// The primary rule wins when it matches; otherwise the fallback is
    /// tried. `None` means the token is not a recognizable package file and
    /// the caller routes the line to its unknown bucket instead of aborting.
    pub fn parse(&self, token: &str) -> Option<PackageIdentity> {
        let caps = self
            .primary
            .captures(token)
            .or_else(|| self.fallback.captures(token))?;
        Some(PackageIdentity {
            name: caps[1].to_string(),
            version: caps[2].to_string(),
            arch: caps[3].to_string(),
        })
    }
}

impl Default for PackagePatterns {
    fn default() -> Self {
        Self::new()
    }
}
