//! rpmaudit CLI binary entry point.
//! Builds the mirror index and host inventory, reconciles them, and prints
//! the classified report.

mod audit;
mod cli;
mod config;
mod error;
mod host;
mod mirror;
mod models;
mod output;
mod package;
mod utils;
mod version;

use clap::Parser;
use cli::Cli;
use error::AuditError;
use mirror::MirrorFilter;
use package::PackagePatterns;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        Path::new("."),
        cli.rpmlist.as_deref(),
        cli.repocache.as_deref(),
    );

    // JSON mode keeps stdout to a single document.
    if eff.output != "json" {
        println!("{}", output::BANNER);
    }

    let patterns = PackagePatterns::new();
    let filter = MirrorFilter {
        version: eff.mirror_version,
        arch: eff.mirror_arch.clone(),
    };

    let index = match mirror::parse_mirror_listing(open_input(&eff.repocache), &filter, &patterns)
    {
        Ok(index) => index,
        Err(e) => input_error(&eff.repocache, e),
    };
    let inventory = match host::parse_host_report(open_input(&eff.rpmlist), &patterns) {
        Ok(inventory) => inventory,
        Err(e) => input_error(&eff.rpmlist, e),
    };

    match audit::reconcile(&index, &inventory) {
        Ok(result) => output::print_audit(&result, &eff.output),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}

/// Open an input file or exit with a message naming it.
fn open_input(path: &Path) -> BufReader<File> {
    match File::open(path) {
        Ok(f) => BufReader::new(f),
        Err(e) => input_error(path, e),
    }
}

fn input_error(path: &Path, source: std::io::Error) -> ! {
    eprintln!(
        "{} {}",
        utils::error_prefix(),
        AuditError::Io {
            path: path.display().to_string(),
            source,
        }
    );
    std::process::exit(2);
}
