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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 进程启动错误类型
#[derive(Error, Debug)]
pub enum LaunchError {
    /// 找不到可执行文件
    #[error("Executable not found: {0}")]
    NotFound(String),
    /// 超时
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
    /// 空命令
    #[error("Empty command line")]
    EmptyCommand,
    /// 其他I/O错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 子进程输出
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// 退出码（被信号终止时为None）
    pub exit_code: Option<i32>,
    /// 标准输出文本
    pub stdout: String,
    /// 标准错误文本
    pub stderr: String,
}

/// 进程启动器特质
///
/// 运行一个参数向量并在超时内收集输出
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// 执行命令
    ///
    /// # 参数
    ///
    /// * `argv` - 程序名及参数
    /// * `timeout` - 硬超时
    async fn invoke(&self, argv: &[String], timeout: Duration)
        -> Result<ProcessOutput, LaunchError>;

    /// 启动器名称
    fn name(&self) -> &'static str;
}
