// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::AuditSettings;
use crate::domain::models::audit::{AuditError, AuditOutcome, AuditRequest, AuditResult};
use crate::engines::lighthouse::LighthouseCommand;
use crate::engines::traits::{LaunchError, ProcessLauncher};
use crate::infrastructure::artifact::ReportArtifact;
use crate::infrastructure::report::LighthouseReport;
use crate::utils::errors::AuditRunError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 审计运行器
///
/// 通过外部Lighthouse进程测量页面，并把报告整理为简化的分数摘要。
/// 每次调用只启动一个子进程，只分配一个报告位置，不做任何重试。
pub struct AuditRunner<L: ProcessLauncher> {
    /// 进程启动器
    launcher: Arc<L>,
    /// Lighthouse命令
    command: LighthouseCommand,
    /// 子进程超时
    timeout: Duration,
    /// stderr 截断长度
    stderr_limit: usize,
}

impl<L: ProcessLauncher> AuditRunner<L> {
    /// 创建新的审计运行器
    ///
    /// # 参数
    ///
    /// * `launcher` - 进程启动器
    /// * `settings` - 审计配置
    pub fn new(launcher: Arc<L>, settings: &AuditSettings) -> Self {
        Self {
            launcher,
            command: LighthouseCommand::new(settings.tool.clone()),
            timeout: settings.timeout(),
            stderr_limit: settings.stderr_limit,
        }
    }

    /// 执行一次审计
    ///
    /// # 参数
    ///
    /// * `request` - 审计请求
    ///
    /// # 返回值
    ///
    /// * `Ok(AuditOutcome)` - 成功结果或可预期的审计错误
    /// * `Err(AuditRunError)` - 无法分配临时文件或启动进程等非预期故障
    pub async fn run_audit(&self, request: &AuditRequest) -> Result<AuditOutcome, AuditRunError> {
        let artifact = ReportArtifact::allocate().map_err(AuditRunError::Artifact)?;
        let outcome = self.run_with_artifact(request, &artifact).await;
        // `artifact` drops here and removes its directory
        outcome
    }

    /// 使用已分配的报告位置执行审计
    pub async fn run_with_artifact(
        &self,
        request: &AuditRequest,
        artifact: &ReportArtifact,
    ) -> Result<AuditOutcome, AuditRunError> {
        let argv = self.command.argv(&request.url, artifact.path());
        info!(
            url = %request.url,
            tool = %self.command.tool,
            launcher = self.launcher.name(),
            timeout_secs = self.timeout.as_secs(),
            "Starting Lighthouse audit"
        );
        debug!(?argv, artifact = %artifact.path().display(), "Lighthouse command line");

        let output = match self.launcher.invoke(&argv, self.timeout).await {
            Ok(output) => output,
            Err(LaunchError::NotFound(program)) => {
                warn!(program = %program, "Lighthouse launcher not found");
                return Ok(AuditError::tool_not_found().into());
            }
            Err(LaunchError::Timeout(after)) => {
                warn!(url = %request.url, ?after, "Lighthouse audit timed out");
                return Ok(AuditError::timeout().into());
            }
            Err(LaunchError::EmptyCommand) => {
                return Err(AuditRunError::InvalidCommand(
                    "empty Lighthouse command line".to_string(),
                ));
            }
            Err(LaunchError::Io(e)) => return Err(AuditRunError::Launch(e)),
        };

        debug!(exit_code = ?output.exit_code, "Lighthouse process exited");

        // Only the artifact decides success, the exit status is not consulted
        if !artifact.exists() {
            warn!(
                url = %request.url,
                exit_code = ?output.exit_code,
                "Lighthouse did not produce a report"
            );
            return Ok(AuditError::report_missing(&output.stderr, self.stderr_limit).into());
        }

        let report = match artifact.read().await {
            Ok(content) => LighthouseReport::parse(&content).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        let report = match report {
            Ok(report) => report,
            Err(detail) => {
                warn!(url = %request.url, error = %detail, "Lighthouse report is unreadable");
                return Ok(AuditError::report_invalid(&detail, self.stderr_limit).into());
            }
        };

        if let Err(e) = artifact.remove_file().await {
            warn!(error = %e, "Failed to delete Lighthouse report");
        }

        let result = AuditResult::new(request.url.clone(), report.scores());
        info!(
            url = %result.url,
            performance = result.scores.performance,
            accessibility = result.scores.accessibility,
            best_practices = result.scores.best_practices,
            seo = result.scores.seo,
            "Lighthouse audit completed"
        );

        Ok(result.into())
    }
}
