//! Installer platforms and target resolution.
//!
//! A release run builds installers for a [`TargetSet`]. The set is resolved
//! from the operator's [`Target`] selector: an explicit platform selects
//! itself, while [`Target::All`] selects the host's native platform only.
//!
//! # Processing Order
//!
//! | Order | Platform | Installer |
//! |-------|----------|-----------|
//! | 1 | [`Platform::Windows`] | NSIS `Setup.exe` |
//! | 2 | [`Platform::Linux`] | AppImage |
//! | 3 | [`Platform::Macos`] | `.pkg` |

use clap::ValueEnum;
use std::fmt;

/// Concrete platform an installer is built for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Platform {
    /// Windows NSIS installer.
    Windows,
    /// Linux AppImage.
    Linux,
    /// macOS installer package.
    Macos,
}

impl Platform {
    /// All platforms in processing order.
    pub const ORDER: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::Macos];

    /// Returns the lowercase identifier used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Macos => "macos",
        }
    }

    /// Picks the platform matching an OS identity string such as `Windows`,
    /// `Darwin` or `Linux`.
    ///
    /// Matching is by case-insensitive substring; anything that is neither
    /// Windows nor Darwin is treated as Linux.
    pub fn from_os_identity(identity: &str) -> Self {
        let identity = identity.to_lowercase();
        if identity.contains("windows") {
            Platform::Windows
        } else if identity.contains("darwin") {
            Platform::Macos
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Operator-facing target selector.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Target {
    /// Windows only.
    Windows,
    /// Linux only.
    Linux,
    /// macOS only.
    Macos,
    /// The host's native platform.
    #[default]
    All,
}

impl Target {
    /// Resolve against the identity of the running operating system.
    pub fn resolve(self) -> TargetSet {
        self.resolve_for(host_os_identity())
    }

    /// Resolve against an explicit OS identity string.
    ///
    /// Always yields exactly one platform.
    pub fn resolve_for(self, os_identity: &str) -> TargetSet {
        let platform = match self {
            Target::Windows => Platform::Windows,
            Target::Linux => Platform::Linux,
            Target::Macos => Platform::Macos,
            Target::All => {
                let platform = Platform::from_os_identity(os_identity);
                log::debug!("Target 'all' resolved to {platform} (host OS: {os_identity})");
                platform
            }
        };
        TargetSet::new([platform])
    }
}

/// Identity string of the running OS, in the `uname -s` style
/// (`Windows`, `Darwin`, `Linux`, ...).
pub fn host_os_identity() -> &'static str {
    match std::env::consts::OS {
        "windows" => "Windows",
        "macos" | "ios" => "Darwin",
        "linux" | "android" => "Linux",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        other => other,
    }
}

/// Ordered, duplicate-free set of platforms to package.
///
/// Iteration always follows [`Platform::ORDER`], whatever order the
/// platforms were supplied in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TargetSet {
    platforms: Vec<Platform>,
}

impl TargetSet {
    /// Build a set from any collection of platforms.
    pub fn new(platforms: impl IntoIterator<Item = Platform>) -> Self {
        let mut platforms: Vec<Platform> = platforms.into_iter().collect();
        platforms.sort();
        platforms.dedup();
        Self { platforms }
    }

    /// Whether `platform` is selected.
    pub fn contains(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Selected platforms in processing order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.platforms.iter().copied()
    }

    /// Number of selected platforms.
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Whether no platform is selected.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_targets_resolve_to_themselves() {
        for (target, platform) in [
            (Target::Windows, Platform::Windows),
            (Target::Linux, Platform::Linux),
            (Target::Macos, Platform::Macos),
        ] {
            for host in ["Windows", "Darwin", "Linux"] {
                let set = target.resolve_for(host);
                assert_eq!(set.iter().collect::<Vec<_>>(), vec![platform]);
            }
        }
    }

    #[test]
    fn all_resolves_to_host_platform_only() {
        assert_eq!(
            Target::All.resolve_for("Windows"),
            TargetSet::new([Platform::Windows])
        );
        assert_eq!(
            Target::All.resolve_for("Darwin"),
            TargetSet::new([Platform::Macos])
        );
        assert_eq!(
            Target::All.resolve_for("Linux"),
            TargetSet::new([Platform::Linux])
        );
    }

    #[test]
    fn os_identity_matching_is_case_insensitive_substring() {
        assert_eq!(Platform::from_os_identity("WINDOWS_NT"), Platform::Windows);
        assert_eq!(Platform::from_os_identity("darwin"), Platform::Macos);
        assert_eq!(Platform::from_os_identity("FreeBSD"), Platform::Linux);
        assert_eq!(Platform::from_os_identity(""), Platform::Linux);
    }

    #[test]
    fn all_on_this_host_is_a_singleton() {
        let set = Target::All.resolve();
        assert_eq!(set.len(), 1);

        #[cfg(target_os = "linux")]
        assert!(set.contains(Platform::Linux));

        #[cfg(target_os = "macos")]
        assert!(set.contains(Platform::Macos));

        #[cfg(target_os = "windows")]
        assert!(set.contains(Platform::Windows));
    }

    #[test]
    fn target_set_iterates_in_fixed_order() {
        let set = TargetSet::new([Platform::Macos, Platform::Windows, Platform::Linux, Platform::Macos]);
        assert_eq!(set.iter().collect::<Vec<_>>(), Platform::ORDER.to_vec());
        assert!(!set.is_empty());
    }

    #[test]
    fn target_parses_from_cli_names() {
        assert_eq!(Target::from_str("windows", false), Ok(Target::Windows));
        assert_eq!(Target::from_str("all", false), Ok(Target::All));
        assert!(Target::from_str("beos", false).is_err());
        assert_eq!(Target::default(), Target::All);
    }
}
