//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed kill on timeout and on
//! cancellation.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;

use crate::application::ports::{CommandRunner, ExecContext};
use crate::domain::error::ExecError;

/// Default upper bound for a dry-run when the context carries no timeout.
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(30);

/// Production `CommandRunner` backed by `tokio::process`.
///
/// `tokio::time::timeout` around `.output().await` drops the future but does
/// not kill the OS process on every platform. This implementation uses
/// `tokio::select!` with explicit `child.kill()` so the child is terminated
/// on timeout and on cancellation.
///
/// On Unix the child's stdout and stderr share one pipe, so the captured
/// `Output::stdout` holds both streams in write order and `Output::stderr`
/// is empty. Elsewhere the streams are captured separately.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_CMD_TIMEOUT)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[OsString],
        ctx: &ExecContext,
    ) -> Result<Output, ExecError> {
        let name = program.display().to_string();
        let timeout = ctx.timeout.unwrap_or(self.timeout);

        let (mut child, mut capture) =
            spawn_captured(program, args).map_err(|source| ExecError::Spawn {
                program: name.clone(),
                source,
            })?;

        tokio::select! {
            result = async {
                let (status, (stdout, stderr)) = tokio::join!(child.wait(), capture.drain());
                let status = status.map_err(|source| ExecError::Wait {
                    program: name.clone(),
                    source,
                })?;
                Ok::<Output, ExecError>(Output { status, stdout, stderr })
            } => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                Err(ExecError::TimedOut { program: name, timeout })
            }
            () = ctx.cancel.cancelled() => {
                let _ = child.kill().await;
                Err(ExecError::Cancelled { program: name })
            }
        }
    }
}

/// Read side of the child's output.
enum Capture {
    /// Both streams through one pipe.
    #[cfg(unix)]
    Combined(tokio::net::unix::pipe::Receiver),
    /// One pipe per stream.
    #[cfg_attr(unix, allow(dead_code))]
    Split {
        stdout: Option<tokio::process::ChildStdout>,
        stderr: Option<tokio::process::ChildStderr>,
    },
}

impl Capture {
    /// Read to end; returns `(stdout, stderr)`.
    async fn drain(&mut self) -> (Vec<u8>, Vec<u8>) {
        match self {
            #[cfg(unix)]
            Self::Combined(rx) => (drain(Some(rx)).await, Vec::new()),
            Self::Split { stdout, stderr } => {
                tokio::join!(drain(stdout.as_mut()), drain(stderr.as_mut()))
            }
        }
    }
}

/// Spawn `program` with stdout and stderr writing into the same pipe.
///
/// The `Command` (and with it the parent's copies of the write end) is
/// dropped before returning, so the reader sees EOF once the child and
/// anything it forked have exited.
#[cfg(unix)]
fn spawn_captured(program: &Path, args: &[OsString]) -> io::Result<(Child, Capture)> {
    use std::os::fd::OwnedFd;

    let (reader, writer) = io::pipe()?;
    let child = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer)
        .kill_on_drop(true)
        .spawn()?;
    let rx = tokio::net::unix::pipe::Receiver::from_owned_fd(OwnedFd::from(reader))?;
    Ok((child, Capture::Combined(rx)))
}

#[cfg(not(unix))]
fn spawn_captured(program: &Path, args: &[OsString]) -> io::Result<(Child, Capture)> {
    let mut child = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;
    let capture = Capture::Split {
        stdout: child.stdout.take(),
        stderr: child.stderr.take(),
    };
    Ok((child, capture))
}

/// Read a child pipe to end; a missing or broken pipe yields what was read.
async fn drain<R: AsyncRead + Unpin>(handle: Option<&mut R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(h) = handle {
        let _ = h.read_to_end(&mut buf).await;
    }
    buf
}
