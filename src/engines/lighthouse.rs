// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::audit::Category;
use std::path::Path;

/// Lighthouse命令构造器
///
/// 通过 `npx -y lighthouse` 调用，参数集合固定
#[derive(Debug, Clone)]
pub struct LighthouseCommand {
    /// 启动程序（默认 `npx`）
    pub tool: String,
}

impl Default for LighthouseCommand {
    fn default() -> Self {
        Self {
            tool: "npx".to_string(),
        }
    }
}

impl LighthouseCommand {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// 构造完整参数向量
    ///
    /// # 参数
    ///
    /// * `url` - 审计目标
    /// * `output_path` - 报告输出位置
    pub fn argv(&self, url: &str, output_path: &Path) -> Vec<String> {
        let categories = Category::ALL
            .iter()
            .map(Category::report_key)
            .collect::<Vec<_>>()
            .join(",");

        vec![
            self.tool.clone(),
            "-y".to_string(),
            "lighthouse".to_string(),
            url.to_string(),
            "--output=json".to_string(),
            format!("--output-path={}", output_path.display()),
            "--chrome-flags=--headless".to_string(),
            format!("--only-categories={}", categories),
            "--no-enable-error-reporting".to_string(),
            "--quiet".to_string(),
        ]
    }
}

/// 从参数向量中取回 `--output-path=` 的值
pub fn output_path_arg(argv: &[String]) -> Option<&str> {
    argv.iter()
        .find_map(|arg| arg.strip_prefix("--output-path="))
}
