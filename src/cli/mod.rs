//! Command line interface for frogklan_release.
//!
//! Parses arguments, runs the [`Packager`](crate::packager::Packager) and
//! reports the produced installers.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;
use crate::packager::Packager;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Package according to already parsed arguments
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()?;

    let config = RuntimeConfig::from(args);
    let output = config.output();

    if !args.is_semver() {
        log::warn!("Version '{}' is not valid semver", args.version);
        let _ = output.warn(&format!(
            "Version '{}' is not semver; packaging anyway",
            args.version
        ));
    }
    if config.is_dry_run() {
        let _ = output.info("Dry run: checking inputs only, no tools will run");
    }

    let packager = Packager::new(args.settings(), output.clone()).dry_run(config.is_dry_run());
    let result = packager.package(&args.request()).await?;

    let title = if config.is_dry_run() {
        "would produce"
    } else {
        "outputs"
    };
    let _ = output.section(title);
    for path in result.outputs() {
        let _ = output.indent(&format!("- {}", path.display()));
    }
    if !config.is_dry_run() {
        let _ = output.success(&format!("Built {} installer(s)", result.outputs().len()));
    }

    Ok(0)
}
