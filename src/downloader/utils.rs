// Child process helpers shared by the provider implementations

use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration as TokioDuration};

use crate::downloader::errors::CommandError;
use crate::downloader::models::ExternalCommandResult;

/// Run command with timeout, capturing stdout and stderr.
///
/// The child is killed when the timeout elapses and is also killed if the
/// returned future is dropped early.
pub async fn run_output_with_timeout(
    program: &str,
    args: &[String],
    timeout_secs: u64,
) -> Result<ExternalCommandResult, CommandError> {
    let mut child = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let mut stdout_pipe = child.stdout.take().ok_or_else(|| CommandError::Capture {
        program: program.to_string(),
        stream: "stdout",
    })?;
    let mut stderr_pipe = child.stderr.take().ok_or_else(|| CommandError::Capture {
        program: program.to_string(),
        stream: "stderr",
    })?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe
            .read_to_end(&mut buf)
            .await
            .map_err(|e| CommandError::Read {
                stream: "stdout",
                message: e.to_string(),
            })?;
        Ok::<Vec<u8>, CommandError>(buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe
            .read_to_end(&mut buf)
            .await
            .map_err(|e| CommandError::Read {
                stream: "stderr",
                message: e.to_string(),
            })?;
        Ok::<Vec<u8>, CommandError>(buf)
    });

    let waited = timeout(TokioDuration::from_secs(timeout_secs), child.wait()).await;
    match waited {
        Ok(status_res) => {
            let status = status_res.map_err(|source| CommandError::Wait {
                program: program.to_string(),
                source,
            })?;
            let stdout = join_reader(stdout_task, "stdout").await?;
            let stderr = join_reader(stderr_task, "stderr").await?;
            Ok(ExternalCommandResult {
                exit_code: status.code(),
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
            })
        }
        Err(_) => {
            let _ = child.kill().await;
            stdout_task.abort();
            stderr_task.abort();
            Err(CommandError::TimedOut(timeout_secs))
        }
    }
}

async fn join_reader(
    task: tokio::task::JoinHandle<Result<Vec<u8>, CommandError>>,
    stream: &'static str,
) -> Result<Vec<u8>, CommandError> {
    task.await.map_err(|e| CommandError::Read {
        stream,
        message: e.to_string(),
    })?
}

/// Run command with inherited stdio so the tool's own progress output reaches
/// the terminal. Returns the exit code (`None` if killed by a signal).
pub async fn run_streaming(program: &str, args: &[String]) -> Result<Option<i32>, CommandError> {
    let status = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;
    Ok(status.code())
}

/// Number of regular files directly inside `dir`; 0 if it cannot be read
pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
                .count()
        })
        .unwrap_or(0)
}
