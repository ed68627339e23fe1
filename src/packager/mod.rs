//! Release packaging for Windows, Linux and macOS installers.
//!
//! The [`Packager`] runs a fixed validate → invoke → validate sequence for
//! each platform of a [`TargetSet`], in [`Platform::ORDER`]:
//!
//! 1. The pre-built artifact and the installer script must exist.
//! 2. The platform's external tool is printed and run to completion.
//! 3. The expected installer must exist afterwards.
//!
//! The first failure aborts the run; later platforms are never attempted.
//!
//! # Example
//!
//! ```no_run
//! use frogklan_release::packager::{Packager, PackagerSettings, ReleaseRequest, Target};
//! use frogklan_release::cli::OutputManager;
//!
//! # async fn example() -> frogklan_release::Result<()> {
//! let packager = Packager::new(PackagerSettings::default(), OutputManager::new(false, false));
//! let request = ReleaseRequest::new("1.2.3", Target::Linux);
//! let result = packager.package(&request).await?;
//! for path in result.outputs() {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod invocation;
mod linux;
mod macos;
mod platform;
mod settings;
mod windows;

pub use invocation::ToolInvocation;
pub use platform::{Platform, Target, TargetSet, host_os_identity};
pub use settings::{APP_NAME, ArtifactPaths, PackagerSettings};

use crate::cli::OutputManager;
use crate::error::{ErrorExt, ReleaseError, Result};
use std::path::{Path, PathBuf};

/// What the operator asked for: one version, one target selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    version: String,
    target: Target,
}

impl ReleaseRequest {
    /// Create a request.
    pub fn new(version: impl Into<String>, target: Target) -> Self {
        Self {
            version: version.into(),
            target,
        }
    }

    /// Release version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Target selector.
    pub fn target(&self) -> Target {
        self.target
    }
}

/// Installers produced by a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildResult {
    outputs: Vec<PathBuf>,
}

impl BuildResult {
    /// Produced installer paths.
    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    /// Consume into the list of paths.
    pub fn into_outputs(self) -> Vec<PathBuf> {
        self.outputs
    }
}

/// Drives the external installer tools.
#[derive(Debug, Clone)]
pub struct Packager {
    settings: PackagerSettings,
    output: OutputManager,
    dry_run: bool,
}

impl Packager {
    /// Create a packager printing through `output`.
    pub fn new(settings: PackagerSettings, output: OutputManager) -> Self {
        Self {
            settings,
            output,
            dry_run: false,
        }
    }

    /// Validate inputs and print commands without running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Active settings.
    pub fn settings(&self) -> &PackagerSettings {
        &self.settings
    }

    /// Resolve the request's target against the host OS and package it.
    pub async fn package(&self, request: &ReleaseRequest) -> Result<BuildResult> {
        let targets = request.target().resolve();
        self.package_targets(request.version(), &targets).await
    }

    /// Package every platform of `targets` for `version`.
    pub async fn package_targets(&self, version: &str, targets: &TargetSet) -> Result<BuildResult> {
        if !self.dry_run {
            let out_dir = self.settings.output_dir();
            tokio::fs::create_dir_all(&out_dir)
                .await
                .fs_context("creating output directory", &out_dir)?;
        }

        let mut result = BuildResult::default();
        for platform in targets.iter() {
            let output = self.package_platform(platform, version).await?;
            result.outputs.push(output);
        }

        Ok(result)
    }

    async fn package_platform(&self, platform: Platform, version: &str) -> Result<PathBuf> {
        log::info!("Packaging {} installer for version {}", platform, version);

        let paths = self.settings.artifacts(platform, version);
        self.ensure_input(&paths.input, paths.input_what).await?;
        self.ensure_input(&paths.builder, paths.builder_what).await?;

        let invocation = match platform {
            Platform::Windows => windows::invocation(&self.settings, &paths, version)?,
            Platform::Linux => linux::invocation(&self.settings, &paths, version),
            Platform::Macos => macos::invocation(&self.settings, &paths, version),
        };

        let _ = self.output.command(&invocation.to_string());
        for (key, value) in invocation.envs() {
            let _ = self.output.verbose(&format!("{key}={value}"));
        }

        let output = self.settings.resolve(&paths.output);
        if self.dry_run {
            log::info!("Dry run: skipped {}", invocation.program());
            return Ok(output);
        }

        invocation.run().await?;

        if !exists(&output).await? {
            return Err(ReleaseError::MissingOutput {
                what: paths.output_what,
                path: output,
            });
        }

        log::info!("Created {} installer: {}", platform, output.display());
        Ok(output)
    }

    async fn ensure_input(&self, relative: &Path, what: &'static str) -> Result<()> {
        let path = self.settings.resolve(relative);
        if exists(&path).await? {
            log::debug!("Found {what} at {}", path.display());
            Ok(())
        } else {
            Err(ReleaseError::MissingInput { what, path })
        }
    }
}

async fn exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .fs_context("checking for", path)
}

/// Shared invocation for the positional-argument builder scripts.
fn builder_script(settings: &PackagerSettings, paths: &ArtifactPaths, version: &str) -> ToolInvocation {
    ToolInvocation::new(&settings.shell)
        .path_arg(&paths.builder)
        .arg(&settings.app_name)
        .arg(version)
        .path_arg(&paths.dist_dir)
        .path_arg(&settings.out_dir)
        .arg(&paths.artifact_name)
        .current_dir(&settings.root)
}
