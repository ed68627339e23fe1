//! # frogklan_release
//!
//! Release packaging for frogklan: turns pre-built binaries into a Windows
//! NSIS `Setup.exe`, a Linux AppImage or a macOS `.pkg` by driving the
//! external installer tools, and checks each installer really appeared.
//!
//! ## Usage
//!
//! ```bash
//! frogklan_release --version 1.2.3                   # host's native installer
//! frogklan_release --version 1.2.3 --target linux    # AppImage only
//! frogklan_release --version 1.2.3 --dry-run         # check inputs, print commands
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod packager;

// Re-export main types for public API
pub use cli::Args;
pub use error::{CliError, ReleaseError, Result};
pub use packager::{BuildResult, Packager, PackagerSettings, Platform, ReleaseRequest, Target, TargetSet};
