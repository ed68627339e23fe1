//! macOS installer package.

use crate::packager::{ArtifactPaths, PackagerSettings, ToolInvocation};

/// Build the pkg builder invocation.
///
/// The script gets app name, version, distribution directory, output
/// directory and app bundle name, in that order.
pub fn invocation(settings: &PackagerSettings, paths: &ArtifactPaths, version: &str) -> ToolInvocation {
    super::builder_script(settings, paths, version)
}
