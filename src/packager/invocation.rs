//! External tool invocations.
//!
//! A [`ToolInvocation`] is a plain description of a command: program,
//! arguments, extra environment and working directory. Platform modules
//! build one, the packager prints it and then [`ToolInvocation::run`]s it to
//! completion.

use crate::error::{ErrorExt, ReleaseError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
}

impl ToolInvocation {
    /// Start describing a call to `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }

    /// Set an environment variable on top of the inherited environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Run the child in `dir`. An empty path keeps the current directory.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.current_dir = if dir.as_os_str().is_empty() {
            None
        } else {
            Some(dir.to_path_buf())
        };
        self
    }

    /// Program as configured.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Positional arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Extra environment variables.
    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Look up an extra environment variable.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Locate the program on `PATH`, or relative to the working directory
    /// when it contains a path separator.
    pub fn resolve_program(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().fs_context("reading working directory", ".")?;
        let cwd = match &self.current_dir {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };

        which::which_in(&self.program, std::env::var_os("PATH"), cwd).map_err(|e| {
            ReleaseError::ToolNotFound {
                program: self.program.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// Run to completion with inherited stdio.
    ///
    /// A non-zero exit status is an error; there are no retries.
    pub async fn run(&self) -> Result<()> {
        let program = self.resolve_program()?;
        log::debug!("Resolved {} to {}", self.program, program.display());

        let mut command = tokio::process::Command::new(&program);
        command.args(&self.args);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .await
            .map_err(|error| ReleaseError::CommandFailed {
                command: self.to_string(),
                error,
            })?;

        log::debug!("{} exited with {}", self.program, status);

        if !status.success() {
            return Err(ReleaseError::ToolFailed {
                command: self.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_space_joined_command_line() {
        let invocation = ToolInvocation::new("bash")
            .arg("installers/linux/make_appimage.sh")
            .arg("frogklan")
            .arg("2.0.0");
        assert_eq!(
            invocation.to_string(),
            "bash installers/linux/make_appimage.sh frogklan 2.0.0"
        );
    }

    #[test]
    fn environment_is_not_part_of_command_line() {
        let invocation = ToolInvocation::new("makensis")
            .arg("installer.nsi")
            .env("APP_VERSION", "1.2.3");
        assert_eq!(invocation.to_string(), "makensis installer.nsi");
        assert_eq!(invocation.env_value("APP_VERSION"), Some("1.2.3"));
        assert_eq!(invocation.env_value("APP_NAME"), None);
    }

    #[test]
    fn empty_working_directory_is_ignored() {
        let invocation = ToolInvocation::new("bash").current_dir(Path::new(""));
        assert_eq!(invocation, ToolInvocation::new("bash"));
    }

    #[test]
    fn unknown_program_is_tool_not_found() {
        let invocation = ToolInvocation::new("frogklan-no-such-tool-7d1e");
        let err = invocation.resolve_program().unwrap_err();
        assert!(matches!(err, ReleaseError::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_tool_failed() {
        let err = ToolInvocation::new("sh")
            .arg("-c")
            .arg("exit 7")
            .run()
            .await
            .unwrap_err();
        assert!(matches!(err, ReleaseError::ToolFailed { code: Some(7), .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn passes_env_and_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        ToolInvocation::new("sh")
            .arg("-c")
            .arg("printf %s \"$GREETING\" > greeting.txt")
            .env("GREETING", "ribbit")
            .current_dir(dir.path())
            .run()
            .await
            .unwrap();
        let written = std::fs::read_to_string(dir.path().join("greeting.txt")).unwrap();
        assert_eq!(written, "ribbit");
    }
}
