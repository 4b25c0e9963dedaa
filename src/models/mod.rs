//! Result records for the audit report.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A package older than the mirror's best version.
pub struct OutdatedEntry {
    pub name: String,
    pub arch: String,
    pub installed: String,
    pub available: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A package ahead of the mirror's best version.
pub struct NewerEntry {
    pub name: String,
    pub arch: String,
    pub installed: String,
    pub available: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A package the mirror does not track, or a raw line no rule recognized.
pub struct UnofficialEntry {
    pub name: String,
    pub arch: String,
    pub installed: String,
}

#[derive(Debug, Default, Serialize)]
/// Classified audit results, in report order.
pub struct AuditResult {
    pub outdated: Vec<OutdatedEntry>,
    pub newer: Vec<NewerEntry>,
    pub unofficial: Vec<UnofficialEntry>,
}
