// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{LaunchError, ProcessLauncher, ProcessOutput};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Tokio进程启动器
///
/// 直接执行可执行文件，或者在 `use_shell` 开启时交给平台shell解释
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessLauncher {
    /// 是否通过shell启动
    pub use_shell: bool,
}

impl TokioProcessLauncher {
    pub fn new(use_shell: bool) -> Self {
        Self { use_shell }
    }

    /// 构造实际要执行的命令，同时返回程序名
    fn build_command<'a>(&self, argv: &'a [String]) -> Result<(Command, &'a str), LaunchError> {
        let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;

        let mut command = if self.use_shell {
            shell_command(&shell_command_line(argv))
        } else {
            let mut direct = Command::new(program);
            direct.args(args);
            direct
        };

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future on timeout must not leave the child running
            .kill_on_drop(true);

        Ok((command, program.as_str()))
    }
}

/// `cmd /S /C "<line>"`，命令行原样传递，不再经过参数转义
#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/S", "/C"]).raw_arg(format!("\"{}\"", line));
    command
}

/// `sh -c <line>`
#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

/// 将参数向量拼接为当前平台shell的命令行
pub fn shell_command_line(argv: &[String]) -> String {
    if cfg!(windows) {
        cmd_command_line(argv)
    } else {
        posix_command_line(argv)
    }
}

/// cmd.exe 命令行
///
/// 只有含空白或cmd元字符的参数才加双引号，反斜杠路径保持原样
pub fn cmd_command_line(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            let needs_quotes = arg.is_empty()
                || arg
                    .chars()
                    .any(|c| c.is_whitespace() || "&|<>^()\"".contains(c));
            if needs_quotes {
                format!("\"{}\"", arg.replace('"', "\\\""))
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// POSIX sh 命令行
pub fn posix_command_line(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            let plain = !arg.is_empty()
                && arg
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "-_=./:,@%+".contains(c));
            if plain {
                arg.clone()
            } else {
                format!("'{}'", arg.replace('\'', "'\\''"))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    async fn invoke(
        &self,
        argv: &[String],
        timeout: Duration,
    ) -> Result<ProcessOutput, LaunchError> {
        let (mut command, program) = self.build_command(argv)?;
        let program = program.to_string();

        let child = command.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LaunchError::NotFound(program.clone()),
            _ => LaunchError::Io(e),
        })?;
        tracing::debug!(program = %program, pid = ?child.id(), "Spawned child process");

        let start = Instant::now();
        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                tracing::warn!(program = %program, ?timeout, "Child process timed out");
                LaunchError::Timeout(timeout)
            })??;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(
            program = %program,
            exit_code = ?result.exit_code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Child process finished"
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        if self.use_shell {
            "tokio-shell"
        } else {
            "tokio-direct"
        }
    }
}
