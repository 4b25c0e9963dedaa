//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rpmaudit",
    version,
    about = "Checks a list of installed RPMs against the main mirror to look for updates",
    long_about = "rpmaudit — audit a host's installed packages against a snapshot of a \
package mirror, reporting packages that are outdated, newer than the mirror, or not in \
the official mirror at all.\n\nConfiguration precedence: CLI > rpmaudit.toml > defaults.",
    after_help = "Examples:\n  rpmaudit\n  rpmaudit -r rpmlist.txt -c repocache.txt\n  rpmaudit --rpmlist reports/web01.txt"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(
        short = 'r',
        long,
        help = "The host package report to audit (default: rpmlist.txt)"
    )]
    pub rpmlist: Option<String>,
    #[arg(
        short = 'c',
        long,
        help = "The mirror directory listing to audit against (default: repocache.txt)"
    )]
    pub repocache: Option<String>,
}
