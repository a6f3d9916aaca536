//! Subprocess capture primitive.
//!
//! Spawns a helper tool with its stdout redirected into a pipe, blocks until
//! it exits, and returns the captured text. The child gets no access to the
//! parent's stdin or stderr. Output is captured into a dynamically sized
//! buffer bounded by an explicit maximum, with truncation reported rather
//! than silently applied.
//!
//! There is deliberately no timeout: a hung tool stalls that attribute's
//! resolution. Pipe ends and the child handle are released on every exit
//! path, including read failures, so repeated probes cannot exhaust the
//! descriptor table.

use std::io::Read;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

/// Default cap on captured output.
pub const DEFAULT_MAX_CAPTURE_BYTES: usize = 64 * 1024;

/// Errors that can occur while capturing tool output.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to read output of {program}: {source}")]
    Read {
        program: String,
        source: std::io::Error,
    },
}

/// Captured stdout of one tool invocation.
#[derive(Debug, Clone)]
pub struct Capture {
    /// Captured text with a single trailing newline trimmed.
    pub text: String,

    /// Whether the output exceeded the cap and was cut off.
    pub truncated: bool,
}

/// Synchronous tool runner.
#[derive(Debug, Clone)]
pub struct Runner {
    max_capture_bytes: usize,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            max_capture_bytes: DEFAULT_MAX_CAPTURE_BYTES,
        }
    }
}

impl Runner {
    pub fn new(max_capture_bytes: usize) -> Self {
        Self { max_capture_bytes }
    }

    /// Run `program` with `args` and capture its stdout.
    ///
    /// The child inherits the parent environment with `LC_ALL`/`LANG` pinned
    /// to `C` so tool output stays parseable regardless of locale. A missing
    /// binary or failed spawn is an error; a non-zero exit status is not —
    /// whatever was captured is returned and callers treat empty output as
    /// an unavailable source.
    pub fn capture<I, S>(&self, program: &str, args: I) -> Result<Capture, CaptureError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .env("LC_ALL", "C")
            .env("LANG", "C")
            .spawn()
            .map_err(|source| CaptureError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let mut buf = Vec::new();
        let read_result = match child.stdout.take() {
            Some(mut stdout) => {
                let limit = self.max_capture_bytes as u64 + 1;
                let result = (&mut stdout).take(limit).read_to_end(&mut buf);
                if result.is_ok() && buf.len() > self.max_capture_bytes {
                    // Cap hit; drain the remainder so the child can exit
                    // instead of blocking on a full pipe.
                    let _ = std::io::copy(&mut stdout, &mut std::io::sink());
                }
                result
            }
            None => Ok(0),
        };

        // Reap the child on every path to avoid zombies.
        let _ = child.wait();

        if let Err(source) = read_result {
            return Err(CaptureError::Read {
                program: program.to_string(),
                source,
            });
        }

        let truncated = buf.len() > self.max_capture_bytes;
        if truncated {
            buf.truncate(self.max_capture_bytes);
            debug!(
                program,
                limit = self.max_capture_bytes,
                "tool output truncated"
            );
        }

        let mut text = String::from_utf8_lossy(&buf).into_owned();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }

        Ok(Capture { text, truncated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_echo() {
        let runner = Runner::default();
        let capture = runner.capture("echo", ["hello", "world"]).unwrap();
        assert_eq!(capture.text, "hello world");
        assert!(!capture.truncated);
    }

    #[test]
    fn test_single_trailing_newline_trimmed() {
        let runner = Runner::default();
        let capture = runner.capture("printf", ["one\\ntwo\\n"]).unwrap();
        assert_eq!(capture.text, "one\ntwo");
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let runner = Runner::default();
        let result = runner.capture("/nonexistent/hostfetch-helper", [] as [&str; 0]);
        match result {
            Err(CaptureError::Spawn { program, .. }) => {
                assert_eq!(program, "/nonexistent/hostfetch-helper");
            }
            other => panic!("expected Spawn error, got {other:?}"),
        }
    }

    #[test]
    fn test_output_truncated_at_cap() {
        let runner = Runner::new(100);
        let capture = runner
            .capture("sh", ["-c", "yes | head -n 1000"])
            .unwrap();
        assert!(capture.truncated);
        assert!(capture.text.len() <= 100);
    }

    #[test]
    fn test_empty_output() {
        let runner = Runner::default();
        let capture = runner.capture("true", [] as [&str; 0]).unwrap();
        assert_eq!(capture.text, "");
    }

    #[test]
    fn test_nonzero_exit_still_captures() {
        let runner = Runner::default();
        let capture = runner
            .capture("sh", ["-c", "echo partial; exit 3"])
            .unwrap();
        assert_eq!(capture.text, "partial");
    }
}
