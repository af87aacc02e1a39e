// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::audit::{AuditError, AuditOutcome, AuditRequest};
use crate::domain::services::audit_service::AuditRunner;
use crate::engines::process_launcher::TokioProcessLauncher;
use crate::utils::errors::AppError;
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use std::ffi::OsString;
use std::process::ExitCode;
use std::sync::Arc;

/// 程序名，用于用法提示
pub const PROGRAM_NAME: &str = "auditrs";

/// 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "auditrs",
    version,
    about = "Run a Lighthouse audit and print performance, accessibility, best-practices and SEO scores as JSON"
)]
pub struct Cli {
    /// URL to audit
    pub url: Option<String>,
}

/// 参数解析结果
#[derive(Debug)]
pub enum Invocation {
    /// 执行审计
    Audit(AuditRequest),
    /// 缺少URL或参数无效，输出用法错误
    Usage(AuditError),
    /// `--help` / `--version`，由clap自行输出
    Info(clap::Error),
}

/// 解析命令行参数
pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(Cli { url: Some(url) }) => Invocation::Audit(AuditRequest::new(url)),
        Ok(Cli { url: None }) => Invocation::Usage(AuditError::missing_argument(PROGRAM_NAME)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Info(e)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected command line");
            Invocation::Usage(AuditError::missing_argument(PROGRAM_NAME))
        }
    }
}

/// 用法错误的退出码
pub const EXIT_USAGE: u8 = 1;
/// 非预期故障的退出码
pub const EXIT_FATAL: u8 = 2;

/// 用法错误的JSON载荷
pub fn usage_payload(err: &AuditError) -> serde_json::Value {
    serde_json::json!({ "error": err.error })
}

/// 缩进JSON，用于审计结果
pub fn render_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// 使用给定配置执行一次审计
pub async fn execute(settings: &Settings, request: &AuditRequest) -> Result<AuditOutcome, AppError> {
    let launcher = Arc::new(TokioProcessLauncher::new(settings.launcher.use_shell));
    let runner = AuditRunner::new(launcher, &settings.audit);
    let outcome = runner.run_audit(request).await?;
    Ok(outcome)
}

/// 加载配置、执行审计并打印结果
///
/// 成功结果和可预期的审计错误都以退出码0结束
pub async fn run(request: AuditRequest) -> Result<ExitCode, AppError> {
    let settings = Settings::new()?;
    tracing::debug!(?settings, "Configuration loaded");

    let outcome = execute(&settings, &request).await?;
    println!("{}", render_pretty(&outcome)?);
    Ok(ExitCode::SUCCESS)
}

/// 打印用法错误
pub fn print_usage_error(err: &AuditError) -> ExitCode {
    println!("{}", usage_payload(err));
    ExitCode::from(EXIT_USAGE)
}

/// 打印非预期故障
pub fn print_fatal(err: &dyn std::fmt::Display) -> ExitCode {
    let payload = serde_json::json!({ "error": err.to_string() });
    println!("{}", payload);
    ExitCode::from(EXIT_FATAL)
}
