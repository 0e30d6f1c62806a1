// Ports - Interface definitions (contracts)

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use crate::domain::model::MediaPath;
use crate::error::ShrinkResult;

/// One external program invocation.
///
/// Arguments are kept as `OsString` so paths reach the tool byte for byte,
/// including names that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<OsString>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Raw value following `flag`, if present
    pub fn value_of_os(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }

    /// Value following `flag`, if present and valid UTF-8
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.value_of_os(flag).and_then(OsStr::to_str)
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Output captured from a finished invocation
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Failure report with both streams included verbatim
    pub fn failure_report(&self, invocation: &ToolInvocation) -> String {
        let status = match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        format!(
            "Command failed ({}): {}\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
            status, invocation, self.stdout, self.stderr
        )
    }
}

/// Port for running external programs to completion
pub trait ExecutePort {
    /// Run the invocation, blocking until it exits, with stdout and stderr captured.
    ///
    /// An `Err` means the process could not be started at all; a non-zero exit
    /// is reported through [`ToolOutput::code`].
    fn run(&self, invocation: &ToolInvocation) -> std::io::Result<ToolOutput>;
}

impl<T: ExecutePort + ?Sized> ExecutePort for &T {
    fn run(&self, invocation: &ToolInvocation) -> std::io::Result<ToolOutput> {
        (**self).run(invocation)
    }
}

/// Port for media file probing
pub trait ProbePort {
    /// Duration of the media in seconds, always positive
    fn probe_duration_seconds(&self, path: &MediaPath) -> ShrinkResult<f64>;
}

impl<T: ProbePort + ?Sized> ProbePort for &T {
    fn probe_duration_seconds(&self, path: &MediaPath) -> ShrinkResult<f64> {
        (**self).probe_duration_seconds(path)
    }
}
