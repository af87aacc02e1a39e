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

use crate::domain::models::audit::STDERR_LIMIT;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含审计和进程启动器两部分配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 审计配置
    pub audit: AuditSettings,
    /// 启动器配置
    pub launcher: LauncherSettings,
}

/// 审计配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSettings {
    /// 启动Lighthouse的程序
    pub tool: String,
    /// 子进程超时时间（秒）
    pub timeout_secs: u64,
    /// stderr 保留的最大字符数
    pub stderr_limit: usize,
}

impl AuditSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            tool: "npx".to_string(),
            timeout_secs: 300,
            stderr_limit: STDERR_LIMIT,
        }
    }
}

/// 进程启动器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherSettings {
    /// 是否通过平台shell启动外部工具
    pub use_shell: bool,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            use_shell: cfg!(windows),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audit: AuditSettings::default(),
            launcher: LauncherSettings::default(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 在默认值之上只叠加 `AUDITRS__*` 环境变量，不读取当前目录下的配置文件
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// `AUDITRS__<SECTION>__<KEY>` 形式的环境变量来源
    pub fn environment() -> Environment {
        Environment::with_prefix("AUDITRS")
            .separator("__")
            .try_parsing(true)
    }

    /// 只包含默认值的构建器
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            // Default audit settings
            .set_default("audit.tool", defaults.audit.tool)?
            .set_default("audit.timeout_secs", defaults.audit.timeout_secs)?
            .set_default("audit.stderr_limit", defaults.audit.stderr_limit as u64)?
            // Default launcher settings
            .set_default("launcher.use_shell", defaults.launcher.use_shell)
    }
}
