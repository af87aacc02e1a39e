// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 审计运行时错误
///
/// 不属于可预期审计失败的故障，向调用方传播
#[derive(Error, Debug)]
pub enum AuditRunError {
    #[error("Failed to allocate report artifact: {0}")]
    Artifact(#[source] std::io::Error),

    #[error("Failed to launch audit tool: {0}")]
    Launch(#[source] std::io::Error),

    #[error("Invalid launch request: {0}")]
    InvalidCommand(String),
}

/// 应用层错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Audit(#[from] AuditRunError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
