//! Reconciliation of a host inventory against the mirror index.
//!
//! Produces an `AuditResult` with three lists: packages behind the mirror,
//! packages ahead of it, and packages the mirror does not track at all.
//! Unparseable host lines are carried into the unofficial list up front.

use crate::error::AuditError;
use crate::host::HostInventory;
use crate::mirror::MirrorIndex;
use crate::models::{AuditResult, NewerEntry, OutdatedEntry, UnofficialEntry};
use crate::utils;
use crate::version;
use regex::Regex;
use std::cmp::Ordering;

/// Assumed when the host report carries no usable OS release string.
const DEFAULT_OS_VERSION: u32 = 6;
/// Assumed when the host report carries no architecture.
const DEFAULT_OS_ARCH: &str = "x86_64";

/// Classify every installed package against the mirror's best versions.
///
/// The resolved (OS version, OS arch) slice must exist in the index; a
/// mirror listing filtered to a different release or architecture is a
/// fatal mismatch rather than an empty report.
pub fn reconcile(
    index: &MirrorIndex,
    inventory: &HostInventory,
) -> Result<AuditResult, AuditError> {
    let os_version = resolve_os_version(inventory);
    let os_arch = resolve_os_arch(inventory);
    let slice = index
        .slice(os_version, &os_arch)
        .ok_or_else(|| AuditError::MissingMirrorBucket {
            version: os_version,
            arch: os_arch.clone(),
        })?;

    let mut result = AuditResult {
        unofficial: inventory.misc.clone(),
        ..AuditResult::default()
    };
    for (package_arch, packages) in &inventory.rpms {
        let known = slice.get(package_arch);
        for (name, installed) in packages {
            let available = match known.and_then(|k| k.get(name)) {
                Some(v) => v,
                None => {
                    result.unofficial.push(UnofficialEntry {
                        name: name.clone(),
                        arch: package_arch.clone(),
                        installed: installed.clone(),
                    });
                    continue;
                }
            };
            match version::compare(installed, available) {
                Ordering::Equal => {}
                Ordering::Greater => result.newer.push(NewerEntry {
                    name: name.clone(),
                    arch: package_arch.clone(),
                    installed: installed.clone(),
                    available: available.clone(),
                }),
                Ordering::Less => result.outdated.push(OutdatedEntry {
                    name: name.clone(),
                    arch: package_arch.clone(),
                    installed: installed.clone(),
                    available: available.clone(),
                }),
            }
        }
    }
    Ok(result)
}

/// Leading integer of the OS release string, e.g.
/// "CentOS Linux release 7.9.2009 (Core)" resolves to 7.
fn resolve_os_version(inventory: &HostInventory) -> u32 {
    let release = Regex::new(r"^[a-zA-Z ]+ (\d+)[. ]").expect("bad release pattern");
    let found = inventory
        .os_version
        .as_deref()
        .and_then(|ver| release.captures(ver))
        .and_then(|caps| caps[1].parse::<u32>().ok());
    match found {
        Some(v) => v,
        None => {
            eprintln!(
                "{} Unable to find OS version number, assuming {}",
                utils::error_prefix(),
                DEFAULT_OS_VERSION
            );
            DEFAULT_OS_VERSION
        }
    }
}

fn resolve_os_arch(inventory: &HostInventory) -> String {
    match inventory.arch.as_deref() {
        Some(arch) => arch.to_string(),
        None => {
            eprintln!(
                "{} OS architecture was not found, assuming {}",
                utils::warning_prefix(),
                DEFAULT_OS_ARCH
            );
            DEFAULT_OS_ARCH.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::parse_host_report;
    use crate::mirror::{parse_mirror_listing, MirrorFilter};
    use crate::package::PackagePatterns;
    use std::io::Cursor;

    fn audit(listing: &str, report: &str) -> Result<AuditResult, AuditError> {
        audit_filtered(listing, report, &MirrorFilter::default())
    }

    fn audit_filtered(
        listing: &str,
        report: &str,
        filter: &MirrorFilter,
    ) -> Result<AuditResult, AuditError> {
        let patterns = PackagePatterns::new();
        let index = parse_mirror_listing(Cursor::new(listing), filter, &patterns).unwrap();
        let inventory = parse_host_report(Cursor::new(report), &patterns).unwrap();
        reconcile(&index, &inventory)
    }

    #[test]
    fn test_older_install_is_reported_outdated() {
        let result = audit(
            "/7.9.2009/os/x86_64/Packages/bash-4.2.46-34.el7.x86_64.rpm\n",
            "myhost x86_64 CentOS Linux release 7.9.2009 (Core)\n\
             bash-4.2.46-30.el7.x86_64.rpm\n",
        )
        .unwrap();
        assert_eq!(
            result.outdated,
            vec![OutdatedEntry {
                name: "bash".to_string(),
                arch: "x86_64".to_string(),
                installed: "4.2.46-30".to_string(),
                available: "4.2.46-34".to_string(),
            }]
        );
        assert!(result.newer.is_empty());
        assert!(result.unofficial.is_empty());
    }

    #[test]
    fn test_newer_install_is_reported_ahead_of_mirror() {
        let result = audit(
            "/7.9/os/x86_64/Packages/bash-4.2.46-30.el7.x86_64.rpm\n",
            "myhost x86_64 CentOS Linux release 7.9.2009 (Core)\n\
             bash-4.2.46-34.el7.x86_64.rpm\n",
        )
        .unwrap();
        assert!(result.outdated.is_empty());
        assert_eq!(result.newer.len(), 1);
        assert_eq!(result.newer[0].installed, "4.2.46-34");
        assert_eq!(result.newer[0].available, "4.2.46-30");
    }

    #[test]
    fn test_current_install_is_discarded() {
        let result = audit(
            "/7.9/os/x86_64/Packages/bash-4.2.46-34.el7.x86_64.rpm\n",
            "myhost x86_64 CentOS Linux release 7.9.2009 (Core)\n\
             bash-4.2.46-34.el7.x86_64.rpm\n",
        )
        .unwrap();
        assert!(result.outdated.is_empty());
        assert!(result.newer.is_empty());
        assert!(result.unofficial.is_empty());
    }

    #[test]
    fn test_untracked_name_and_arch_are_unofficial() {
        let result = audit(
            "/7.9/os/x86_64/Packages/bash-4.2.46-34.el7.x86_64.rpm\n",
            "myhost x86_64 CentOS Linux release 7.9.2009 (Core)\n\
             localtool-1.0.x86_64.rpm\n\
             glibc-2.17-317.el7.i686.rpm\n",
        )
        .unwrap();
        assert!(result.outdated.is_empty());
        assert!(result.newer.is_empty());
        let names: Vec<&str> = result.unofficial.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["glibc", "localtool"]);
        assert_eq!(result.unofficial[0].arch, "i686");
        assert_eq!(result.unofficial[0].installed, "2.17-317");
    }

    #[test]
    fn test_misc_lines_seed_the_unofficial_list() {
        let result = audit(
            "/7.9/os/x86_64/Packages/bash-4.2.46-34.el7.x86_64.rpm\n",
            "myhost x86_64 CentOS Linux release 7.9.2009 (Core)\n\
             gpg-pubkey\n\
             localtool-1.0.x86_64.rpm\n",
        )
        .unwrap();
        let entries: Vec<(&str, &str, &str)> = result
            .unofficial
            .iter()
            .map(|u| (u.name.as_str(), u.arch.as_str(), u.installed.as_str()))
            .collect();
        assert_eq!(
            entries,
            [
                ("gpg-pubkey", "Unknown", "Unknown"),
                ("localtool", "x86_64", "1.0"),
            ]
        );
    }

    #[test]
    fn test_missing_mirror_slice_is_fatal() {
        let filter = MirrorFilter {
            version: Some(6),
            arch: None,
        };
        let err = audit_filtered(
            "/7.9/os/x86_64/Packages/bash-4.2.46-34.el7.x86_64.rpm\n",
            "myhost x86_64 CentOS Linux release 7.9.2009 (Core)\n\
             bash-4.2.46-30.el7.x86_64.rpm\n",
            &filter,
        )
        .unwrap_err();
        match err {
            AuditError::MissingMirrorBucket { version, arch } => {
                assert_eq!(version, 7);
                assert_eq!(arch, "x86_64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_metadata_falls_back_to_defaults() {
        // No metadata line at all: OS version 6 and arch x86_64 are assumed.
        let result = audit(
            "/6.10/os/x86_64/Packages/bash-4.1.2-15.el6.x86_64.rpm\n",
            "bash-4.1.2-9.el6.x86_64.rpm\n",
        )
        .unwrap();
        assert_eq!(result.outdated.len(), 1);
        assert_eq!(result.outdated[0].installed, "4.1.2-9");
        assert_eq!(result.outdated[0].available, "4.1.2-15");
    }

    #[test]
    fn test_release_string_without_dotted_version_still_resolves() {
        let result = audit(
            "/6.10/os/x86_64/Packages/bash-4.1.2-15.el6.x86_64.rpm\n",
            "myhost x86_64 CentOS release 6 (Final)\n\
             bash-4.1.2-15.el6.x86_64.rpm\n",
        )
        .unwrap();
        assert!(result.outdated.is_empty());
        assert!(result.newer.is_empty());
        assert!(result.unofficial.is_empty());
    }
}
