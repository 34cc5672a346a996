//! CLI argument parsing module for pubfresh

use clap::Parser;
use std::path::PathBuf;

/// Dependency freshness checker for pubspec.yaml manifests
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pubfresh",
    version,
    about = "Check pubspec.yaml dependencies against pub.dev"
)]
pub struct CliArgs {
    /// Path to the manifest file
    #[arg(default_value = "pubspec.yaml")]
    pub path: PathBuf,

    /// Apply available updates to the manifest in place
    #[arg(long)]
    pub apply: bool,

    /// Write bare versions when applying, dropping constraint operators
    #[arg(long)]
    pub bare: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Whether applied edits keep the original constraint-operator prefix
    pub fn keep_prefix(&self) -> bool {
        !self.bare
    }

    /// Whether the progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["pubfresh"]);
        assert_eq!(args.path, PathBuf::from("pubspec.yaml"));
        assert!(!args.apply);
        assert!(!args.bare);
        assert!(!args.json);
        assert!(args.keep_prefix());
        assert!(args.show_progress());
    }

    #[test]
    fn test_explicit_path() {
        let args = CliArgs::parse_from(["pubfresh", "app/pubspec.yaml"]);
        assert_eq!(args.path, PathBuf::from("app/pubspec.yaml"));
    }

    #[test]
    fn test_apply_bare() {
        let args = CliArgs::parse_from(["pubfresh", "--apply", "--bare"]);
        assert!(args.apply);
        assert!(!args.keep_prefix());
    }

    #[test]
    fn test_json_disables_progress() {
        let args = CliArgs::parse_from(["pubfresh", "--json"]);
        assert!(!args.show_progress());
    }

    #[test]
    fn test_quiet_short_flag() {
        let args = CliArgs::parse_from(["pubfresh", "-q"]);
        assert!(args.quiet);
        assert!(!args.show_progress());
    }
}
