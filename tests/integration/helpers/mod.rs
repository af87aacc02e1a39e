// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use auditrs::engines::lighthouse::output_path_arg;
use auditrs::engines::traits::{LaunchError, ProcessLauncher, ProcessOutput};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// 脚本化启动器的行为
#[derive(Debug, Clone)]
pub enum Script {
    /// 写出报告并以给定退出码结束
    WriteReport { report: String, exit_code: i32 },
    /// 不写报告，只输出stderr
    NoReport { stderr: String, exit_code: i32 },
    /// 模拟超时
    Timeout,
    /// 模拟找不到工具
    NotFound,
}

/// 按脚本行事的进程启动器，并记录每次调用
pub struct ScriptedLauncher {
    script: Script,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedLauncher {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn writing(report: &str) -> Self {
        Self::new(Script::WriteReport {
            report: report.to_string(),
            exit_code: 0,
        })
    }

    /// 已记录的调用
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// 最近一次调用中的报告路径
    pub fn last_output_path(&self) -> Option<PathBuf> {
        self.calls()
            .last()
            .and_then(|argv| output_path_arg(argv).map(PathBuf::from))
    }
}

#[async_trait]
impl ProcessLauncher for ScriptedLauncher {
    async fn invoke(
        &self,
        argv: &[String],
        timeout: Duration,
    ) -> Result<ProcessOutput, LaunchError> {
        self.calls.lock().unwrap().push(argv.to_vec());

        match &self.script {
            Script::WriteReport { report, exit_code } => {
                let path = output_path_arg(argv).expect("--output-path argument");
                tokio::fs::write(path, report).await?;
                Ok(ProcessOutput {
                    exit_code: Some(*exit_code),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            }
            Script::NoReport { stderr, exit_code } => Ok(ProcessOutput {
                exit_code: Some(*exit_code),
                stdout: String::new(),
                stderr: stderr.clone(),
            }),
            Script::Timeout => Err(LaunchError::Timeout(timeout)),
            Script::NotFound => Err(LaunchError::NotFound(argv[0].clone())),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
