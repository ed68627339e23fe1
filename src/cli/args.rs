//! Command line argument parsing and validation.

use crate::error::CliError;
use crate::packager::{PackagerSettings, ReleaseRequest, Target};
use clap::Parser;
use std::path::PathBuf;

/// Build platform installers from pre-built frogklan binaries
#[derive(Parser, Debug, Clone)]
#[command(
    name = "frogklan_release",
    about = "Build platform installers from pre-built frogklan binaries",
    long_about = "Build platform installers from pre-built frogklan binaries.

Inputs are read from dist/ and installers/, installers are written to out/.
With --target all (the default) only the host's native installer is built.

Usage:
  frogklan_release --version 1.2.3
  frogklan_release --version 1.2.3 --target windows --makensis /opt/nsis/makensis",
    disable_version_flag = true
)]
pub struct Args {
    /// Release version, e.g. 1.2.3
    #[arg(long = "version", value_name = "VERSION")]
    pub version: String,

    /// Installer target
    #[arg(long, value_enum, default_value_t = Target::All)]
    pub target: Target,

    /// Directory containing dist/, installers/ and out/
    #[arg(long, value_name = "DIR", env = "FROGKLAN_RELEASE_ROOT")]
    pub root: Option<PathBuf>,

    /// NSIS compiler to run for Windows installers
    #[arg(long, value_name = "PROGRAM", env = "MAKENSIS")]
    pub makensis: Option<String>,

    /// Check inputs and print commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Show tool environment and resolution details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    ///
    /// The version ends up inside output file names, so it must not be able
    /// to leave the output directory.
    pub fn validate(&self) -> Result<(), CliError> {
        let version = self.version.trim();
        if version.is_empty() {
            return Err(CliError::InvalidArguments {
                reason: "--version must not be empty".to_string(),
            });
        }
        if version.contains(['/', '\\']) || version.contains("..") {
            return Err(CliError::InvalidArguments {
                reason: format!("--version '{}' must not contain path components", self.version),
            });
        }
        Ok(())
    }

    /// Whether the version parses as semver
    pub fn is_semver(&self) -> bool {
        semver::Version::parse(&self.version).is_ok()
    }

    /// Packaging request described by these arguments
    pub fn request(&self) -> ReleaseRequest {
        ReleaseRequest::new(self.version.clone(), self.target)
    }

    /// Packager settings with command line overrides applied
    pub fn settings(&self) -> PackagerSettings {
        let mut settings = PackagerSettings::default();
        if let Some(root) = &self.root {
            settings.root = root.clone();
        }
        if let Some(makensis) = &self.makensis {
            settings.makensis = makensis.clone();
        }
        settings
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
    dry_run: bool,
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether tools are only printed, not run
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, false),
            dry_run: args.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("frogklan_release").chain(argv.iter().copied()))
    }

    #[test]
    fn target_defaults_to_all() {
        let args = parse(&["--version", "1.2.3"]).unwrap();
        assert_eq!(args.version, "1.2.3");
        assert_eq!(args.target, Target::All);
        assert!(!args.dry_run);
    }

    #[test]
    fn version_is_required() {
        let err = parse(&["--target", "linux"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let err = parse(&["--version", "1.2.3", "--target", "haiku"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn validate_rejects_path_like_versions() {
        for version in ["", "  ", "../1.0.0", "1.0/evil", "1.0\\evil"] {
            let args = parse(&["--version", version]).unwrap();
            assert!(args.validate().is_err(), "accepted {version:?}");
        }
        assert!(parse(&["--version", "1.2.3-rc.1"]).unwrap().validate().is_ok());
    }

    #[test]
    fn non_semver_versions_are_still_valid() {
        let args = parse(&["--version", "2024.10"]).unwrap();
        assert!(args.validate().is_ok());
        assert!(!args.is_semver());
        assert!(parse(&["--version", "1.2.3"]).unwrap().is_semver());
    }

    #[test]
    fn overrides_flow_into_settings() {
        let args = parse(&[
            "--version",
            "1.2.3",
            "--target",
            "windows",
            "--root",
            "/tmp/frog",
            "--makensis",
            "/opt/nsis/makensis",
        ])
        .unwrap();
        let settings = args.settings();
        assert_eq!(settings.root, PathBuf::from("/tmp/frog"));
        assert_eq!(settings.makensis, "/opt/nsis/makensis");
        assert_eq!(args.request(), ReleaseRequest::new("1.2.3", Target::Windows));
    }
}
