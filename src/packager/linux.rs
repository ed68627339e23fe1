//! Linux AppImage.

use crate::packager::{ArtifactPaths, PackagerSettings, ToolInvocation};

/// Build the AppImage builder invocation.
///
/// The script gets app name, version, distribution directory, output
/// directory and executable name, in that order.
pub fn invocation(settings: &PackagerSettings, paths: &ArtifactPaths, version: &str) -> ToolInvocation {
    super::builder_script(settings, paths, version)
}
