//! Windows NSIS installer.
//!
//! `makensis` receives only the script path on its command line; everything
//! else travels through the environment:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `APP_VERSION` | release version |
//! | `APP_NAME` | application name |
//! | `DIST_WIN` | absolute Windows distribution directory |
//! | `WIN_EXE` | executable file name |
//! | `OUT_SETUP` | absolute path of the `Setup.exe` to produce |

use crate::error::{ErrorExt, Result};
use crate::packager::{ArtifactPaths, PackagerSettings, ToolInvocation};
use path_absolutize::Absolutize;
use std::path::Path;

/// Build the `makensis` invocation for `version`.
pub fn invocation(
    settings: &PackagerSettings,
    paths: &ArtifactPaths,
    version: &str,
) -> Result<ToolInvocation> {
    let dist_dir = absolute(&settings.resolve(&paths.dist_dir))?;
    let out_setup = absolute(&settings.resolve(&paths.output))?;

    Ok(ToolInvocation::new(&settings.makensis)
        .path_arg(&paths.builder)
        .env("APP_VERSION", version)
        .env("APP_NAME", &settings.app_name)
        .env("DIST_WIN", dist_dir)
        .env("WIN_EXE", &paths.artifact_name)
        .env("OUT_SETUP", out_setup)
        .current_dir(&settings.root))
}

fn absolute(path: &Path) -> Result<String> {
    let absolute = path
        .absolutize()
        .fs_context("resolving absolute path", path)?;
    Ok(absolute.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::Platform;

    #[test]
    fn passes_parameters_through_environment() {
        let settings = PackagerSettings::with_root("/srv/release");
        let paths = settings.artifacts(Platform::Windows, "1.2.3");
        let invocation = invocation(&settings, &paths, "1.2.3").unwrap();

        assert_eq!(invocation.program(), "makensis");
        assert_eq!(invocation.args(), ["installers/nsis/frogklan_installer.nsi"]);
        assert_eq!(invocation.env_value("APP_VERSION"), Some("1.2.3"));
        assert_eq!(invocation.env_value("APP_NAME"), Some("frogklan"));
        assert_eq!(invocation.env_value("WIN_EXE"), Some("frogklan-win.exe"));

        #[cfg(unix)]
        {
            assert_eq!(invocation.env_value("DIST_WIN"), Some("/srv/release/dist/win"));
            assert_eq!(
                invocation.env_value("OUT_SETUP"),
                Some("/srv/release/out/frogklan-1.2.3-Setup.exe")
            );
        }
    }

    #[test]
    fn relative_root_is_made_absolute() {
        let settings = PackagerSettings::default();
        let paths = settings.artifacts(Platform::Windows, "1.0.0");
        let invocation = invocation(&settings, &paths, "1.0.0").unwrap();

        let dist = invocation.env_value("DIST_WIN").unwrap();
        assert!(Path::new(dist).is_absolute());
        assert!(dist.ends_with("win"));
    }

    #[test]
    fn honours_makensis_override() {
        let settings = PackagerSettings {
            makensis: "/opt/nsis/bin/makensis".to_string(),
            ..PackagerSettings::default()
        };
        let paths = settings.artifacts(Platform::Windows, "1.0.0");
        let invocation = invocation(&settings, &paths, "1.0.0").unwrap();
        assert_eq!(invocation.program(), "/opt/nsis/bin/makensis");
    }
}
