//! rpmaudit core library.
//!
//! This crate exposes the programmatic APIs behind the `rpmaudit` binary:
//! ingesting a mirror directory listing and a host package report, then
//! reconciling the two into outdated/newer/unofficial classifications.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `package`: Package filename identity extraction.
//! - `version`: RPM-style version comparison.
//! - `mirror`: Mirror listing ingestion into the nested package index.
//! - `host`: Host report ingestion.
//! - `audit`: Reconciliation into the classified result lists.
//! - `models`: Result record types.
//! - `output`: Human/JSON report printers.
//! - `error`: Fatal error taxonomy.
//! - `utils`: Colored diagnostic prefixes.
pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod mirror;
pub mod models;
pub mod output;
pub mod package;
pub mod utils;
pub mod version;
