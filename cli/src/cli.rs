use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "update-changelog")]
#[command(
    author,
    version,
    about = "Adds a dated release section to CHANGELOG.md",
    long_about = "Adds a dated release section to CHANGELOG.md in the current directory.\n\n\
                  The section is built from WORKFLOW_VERSION, KOTLIN_CHANGELOG and \
                  SWIFT_CHANGELOG; unset variables are treated as empty."
)]
pub struct Cli {
    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Print the updated changelog instead of writing it
    #[clap(long, default_value_t = false)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        let cli = Cli::try_parse_from(["update-changelog"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.dry_run);
    }

    #[test]
    fn accepts_flags() {
        let cli = Cli::try_parse_from(["update-changelog", "-v", "--dry-run"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.dry_run);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["update-changelog", "NOTES.md"]).is_err());
    }
}
