//! Fixed packaging layout and naming.
//!
//! All paths are relative to a packaging root. With the default (empty)
//! root they are relative to the working directory:
//!
//! ```text
//! dist/win/frogklan-win.exe                 installers/nsis/frogklan_installer.nsi
//! dist/linux/frogklan-linux                 installers/linux/make_appimage.sh
//! dist/mac/frogklan-mac.app                 installers/macos/make_pkg_from_app.sh
//! out/frogklan-{version}-Setup.exe
//! out/frogklan-{version}-x86_64.AppImage
//! out/frogklan-{version}.pkg
//! ```

use crate::packager::Platform;
use std::path::{Path, PathBuf};

/// Application name used in installer file names.
pub const APP_NAME: &str = "frogklan";

/// Layout, naming and tool configuration for a release run.
#[derive(Debug, Clone)]
pub struct PackagerSettings {
    /// Directory every relative path is resolved against.
    pub root: PathBuf,
    /// Application name passed to builders and used in output names.
    pub app_name: String,
    /// Windows executable file name inside `dist_win`.
    pub win_exe: String,
    /// Linux executable file name inside `dist_linux`.
    pub linux_exe: String,
    /// macOS application bundle name inside `dist_mac`.
    pub mac_app: String,
    /// Pre-built Windows distribution directory.
    pub dist_win: PathBuf,
    /// Pre-built Linux distribution directory.
    pub dist_linux: PathBuf,
    /// Pre-built macOS distribution directory.
    pub dist_mac: PathBuf,
    /// NSIS installer script.
    pub nsis_script: PathBuf,
    /// AppImage builder script.
    pub appimage_script: PathBuf,
    /// macOS pkg builder script.
    pub pkg_script: PathBuf,
    /// Output directory for installers.
    pub out_dir: PathBuf,
    /// NSIS compiler program.
    pub makensis: String,
    /// Interpreter for the builder scripts.
    pub shell: String,
}

impl Default for PackagerSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            app_name: APP_NAME.to_string(),
            win_exe: "frogklan-win.exe".to_string(),
            linux_exe: "frogklan-linux".to_string(),
            mac_app: "frogklan-mac.app".to_string(),
            dist_win: PathBuf::from("dist/win"),
            dist_linux: PathBuf::from("dist/linux"),
            dist_mac: PathBuf::from("dist/mac"),
            nsis_script: PathBuf::from("installers/nsis/frogklan_installer.nsi"),
            appimage_script: PathBuf::from("installers/linux/make_appimage.sh"),
            pkg_script: PathBuf::from("installers/macos/make_pkg_from_app.sh"),
            out_dir: PathBuf::from("out"),
            makensis: "makensis".to_string(),
            shell: "bash".to_string(),
        }
    }
}

impl PackagerSettings {
    /// Settings with the default layout under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolve a layout-relative path against the root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Output directory resolved against the root.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.out_dir)
    }

    /// Compute the fixed artifact paths of `platform` for `version`.
    ///
    /// Paths are layout-relative; use [`PackagerSettings::resolve`] for
    /// filesystem access.
    pub fn artifacts(&self, platform: Platform, version: &str) -> ArtifactPaths {
        let app = &self.app_name;
        match platform {
            Platform::Windows => ArtifactPaths {
                dist_dir: self.dist_win.clone(),
                artifact_name: self.win_exe.clone(),
                input: self.dist_win.join(&self.win_exe),
                input_what: "Windows exe",
                builder: self.nsis_script.clone(),
                builder_what: "NSIS script",
                output: self.out_dir.join(format!("{app}-{version}-Setup.exe")),
                output_what: "Windows Setup.exe",
            },
            Platform::Linux => ArtifactPaths {
                dist_dir: self.dist_linux.clone(),
                artifact_name: self.linux_exe.clone(),
                input: self.dist_linux.join(&self.linux_exe),
                input_what: "Linux executable",
                builder: self.appimage_script.clone(),
                builder_what: "AppImage script",
                output: self.out_dir.join(format!("{app}-{version}-x86_64.AppImage")),
                output_what: "AppImage output",
            },
            Platform::Macos => ArtifactPaths {
                dist_dir: self.dist_mac.clone(),
                artifact_name: self.mac_app.clone(),
                input: self.dist_mac.join(&self.mac_app),
                input_what: "macOS .app bundle",
                builder: self.pkg_script.clone(),
                builder_what: "macOS pkg script",
                output: self.out_dir.join(format!("{app}-{version}.pkg")),
                output_what: "macOS .pkg output",
            },
        }
    }
}

/// Inputs and expected output of one platform's packaging step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Distribution directory holding the pre-built artifact.
    pub dist_dir: PathBuf,
    /// File name of the pre-built artifact.
    pub artifact_name: String,
    /// Pre-built executable or bundle.
    pub input: PathBuf,
    /// Description of `input` used in error messages.
    pub input_what: &'static str,
    /// Installer script consumed by the external tool.
    pub builder: PathBuf,
    /// Description of `builder` used in error messages.
    pub builder_what: &'static str,
    /// Installer the external tool must produce.
    pub output: PathBuf,
    /// Description of `output` used in error messages.
    pub output_what: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_follow_platform_suffixes() {
        let settings = PackagerSettings::default();
        assert_eq!(
            settings.artifacts(Platform::Windows, "1.2.3").output,
            Path::new("out").join("frogklan-1.2.3-Setup.exe")
        );
        assert_eq!(
            settings.artifacts(Platform::Linux, "2.0.0").output,
            Path::new("out").join("frogklan-2.0.0-x86_64.AppImage")
        );
        assert_eq!(
            settings.artifacts(Platform::Macos, "0.9.0").output,
            Path::new("out").join("frogklan-0.9.0.pkg")
        );
    }

    #[test]
    fn inputs_live_under_dist() {
        let settings = PackagerSettings::default();
        let linux = settings.artifacts(Platform::Linux, "2.0.0");
        assert_eq!(linux.input, Path::new("dist/linux").join("frogklan-linux"));
        assert_eq!(linux.input_what, "Linux executable");
        assert_eq!(linux.builder, PathBuf::from("installers/linux/make_appimage.sh"));

        let mac = settings.artifacts(Platform::Macos, "0.9.0");
        assert_eq!(mac.artifact_name, "frogklan-mac.app");
        assert_eq!(mac.dist_dir, PathBuf::from("dist/mac"));
    }

    #[test]
    fn empty_root_keeps_paths_relative() {
        let settings = PackagerSettings::default();
        assert_eq!(settings.output_dir(), PathBuf::from("out"));

        let rooted = PackagerSettings::with_root("/srv/release");
        assert_eq!(rooted.output_dir(), PathBuf::from("/srv/release/out"));
    }
}
