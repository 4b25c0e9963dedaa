//! Configuration discovery and effective settings resolution.
//!
//! rpmaudit reads `rpmaudit.toml|yaml|yml` from the working directory (or
//! closest ancestor) and merges it with CLI flags.
//! Defaults:
//! - `rpmlist`: `rpmlist.txt`
//! - `repocache`: `repocache.txt`
//! - `output`: `human`
//! - `[mirror].version|arch`: unset (ingest the whole listing)
//!
//! Overrides precedence: CLI > config file > defaults. Paths from the config
//! file resolve against the directory the file was found in; CLI paths and
//! the built-in defaults resolve against the working directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Mirror ingestion filter section under `[mirror]`.
pub struct MirrorCfg {
    pub version: Option<u32>,
    pub arch: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `rpmaudit.toml|yaml`.
pub struct AuditConfig {
    pub rpmlist: Option<String>,
    pub repocache: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub mirror: Option<MirrorCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the binary after applying precedence.
pub struct Effective {
    pub rpmlist: PathBuf,
    pub repocache: PathBuf,
    pub output: String,
    pub mirror_version: Option<u32>,
    pub mirror_arch: Option<String>,
}

/// Walk upward from `start` to the closest directory holding a config file.
pub fn detect_config_root(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in ["rpmaudit.toml", "rpmaudit.yaml", "rpmaudit.yml"] {
            if cur.join(name).exists() {
                return Some(cur.to_path_buf());
            }
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return None,
        }
    }
}

/// Load `AuditConfig` from `rpmaudit.toml` or `rpmaudit.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<AuditConfig> {
    let toml_path = root.join("rpmaudit.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: AuditConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["rpmaudit.yaml", "rpmaudit.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: AuditConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    start_dir: &Path,
    cli_rpmlist: Option<&str>,
    cli_repocache: Option<&str>,
) -> Effective {
    let root = detect_config_root(start_dir);
    let cfg = root
        .as_deref()
        .and_then(load_config)
        .unwrap_or_default();
    // base.join(p) leaves absolute config paths untouched.
    let base = root.unwrap_or_else(|| start_dir.to_path_buf());

    let rpmlist = cli_rpmlist
        .map(PathBuf::from)
        .or_else(|| cfg.rpmlist.as_ref().map(|p| base.join(p)))
        .unwrap_or_else(|| PathBuf::from("rpmlist.txt"));
    let repocache = cli_repocache
        .map(PathBuf::from)
        .or_else(|| cfg.repocache.as_ref().map(|p| base.join(p)))
        .unwrap_or_else(|| PathBuf::from("repocache.txt"));
    let output = cfg.output.unwrap_or_else(|| "human".to_string());
    let mirror = cfg.mirror.unwrap_or_default();

    Effective {
        rpmlist,
        repocache,
        output,
        mirror_version: mirror.version,
        mirror_arch: mirror.arch,
    }
}
