// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// 审计请求
///
/// 只包含一个目标URL，除了存在性外不做任何校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    /// 目标URL
    pub url: String,
}

impl AuditRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// 审计类别
///
/// 固定的四个测量维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl Category {
    /// 所有类别，顺序与输出顺序一致
    pub const ALL: [Category; 4] = [
        Category::Performance,
        Category::Accessibility,
        Category::BestPractices,
        Category::Seo,
    ];

    /// 报告文件中使用的键
    pub fn report_key(&self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Accessibility => "accessibility",
            Category::BestPractices => "best-practices",
            Category::Seo => "seo",
        }
    }

    /// 输出JSON中使用的键
    pub fn output_key(&self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Accessibility => "accessibility",
            Category::BestPractices => "best_practices",
            Category::Seo => "seo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_key())
    }
}

/// 各类别的整数分数（0-100）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores {
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub seo: u8,
}

impl CategoryScores {
    /// 按类别读取分数
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Performance => self.performance,
            Category::Accessibility => self.accessibility,
            Category::BestPractices => self.best_practices,
            Category::Seo => self.seo,
        }
    }

    /// 按类别写入分数
    pub fn set(&mut self, category: Category, score: u8) {
        match category {
            Category::Performance => self.performance = score,
            Category::Accessibility => self.accessibility = score,
            Category::BestPractices => self.best_practices = score,
            Category::Seo => self.seo = score,
        }
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            map.serialize_entry(category.output_key(), &self.get(category))?;
        }
        map.end()
    }
}

/// 将报告中 [0.0, 1.0] 的原始分数转换为百分比
///
/// 缺失或为 null 的分数视为 0
pub fn safe_score(raw: Option<f64>) -> u8 {
    match raw {
        Some(score) if score.is_finite() => (score * 100.0).round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// 基于性能分数得出的定性总结
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Excellent,
    NeedsImprovement,
    Poor,
}

impl Summary {
    /// 仅根据性能分数计算总结标签
    pub fn from_performance(score: u8) -> Self {
        if score >= 90 {
            Summary::Excellent
        } else if score >= 50 {
            Summary::NeedsImprovement
        } else {
            Summary::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Summary::Excellent => "[OK] Excellent performance",
            Summary::NeedsImprovement => "[!] Needs improvement",
            Summary::Poor => "[X] Poor performance",
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 审计成功结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    /// 原样回显的目标URL
    pub url: String,
    /// 四个类别的分数
    pub scores: CategoryScores,
    /// 定性总结
    pub summary: Summary,
}

impl AuditResult {
    pub fn new(url: impl Into<String>, scores: CategoryScores) -> Self {
        let summary = Summary::from_performance(scores.performance);
        Self {
            url: url.into(),
            scores,
            summary,
        }
    }
}

/// 审计错误的种类，不参与序列化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditErrorKind {
    /// 命令行缺少URL参数
    MissingArgument,
    /// 找不到外部工具
    ToolNotFound,
    /// 外部工具超时
    Timeout,
    /// 子进程结束但没有生成报告
    ReportMissing,
    /// 报告存在但无法解析
    ReportInvalid,
}

/// 审计错误载荷
///
/// 序列化为 `{"error": ..., "stderr"?: ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditError {
    #[serde(skip)]
    pub kind: AuditErrorKind,
    /// 可读的错误原因
    pub error: String,
    /// 外部工具错误输出的前若干个字符
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

/// stderr 截断的默认字符数
pub const STDERR_LIMIT: usize = 500;

impl AuditError {
    pub fn missing_argument(program: &str) -> Self {
        Self {
            kind: AuditErrorKind::MissingArgument,
            error: format!("Usage: {} <url>", program),
            stderr: None,
        }
    }

    pub fn tool_not_found() -> Self {
        Self {
            kind: AuditErrorKind::ToolNotFound,
            error: "Lighthouse CLI not found. Install with: npm install -g lighthouse".to_string(),
            stderr: None,
        }
    }

    pub fn timeout() -> Self {
        Self {
            kind: AuditErrorKind::Timeout,
            error: "Lighthouse audit timed out".to_string(),
            stderr: None,
        }
    }

    pub fn report_missing(stderr: &str, limit: usize) -> Self {
        Self {
            kind: AuditErrorKind::ReportMissing,
            error: "Lighthouse failed to generate report".to_string(),
            stderr: Some(truncate_chars(stderr, limit)),
        }
    }

    pub fn report_invalid(detail: &str, limit: usize) -> Self {
        Self {
            kind: AuditErrorKind::ReportInvalid,
            error: "Lighthouse report could not be parsed".to_string(),
            stderr: Some(truncate_chars(detail, limit)),
        }
    }
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}

/// 截取前 `limit` 个字符（按Unicode标量计）
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// 单次审计的最终结果，成功与失败二选一
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuditOutcome {
    Success(AuditResult),
    Failure(AuditError),
}

impl AuditOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuditOutcome::Success(_))
    }

    /// 失败时返回错误种类
    pub fn error_kind(&self) -> Option<AuditErrorKind> {
        match self {
            AuditOutcome::Success(_) => None,
            AuditOutcome::Failure(err) => Some(err.kind),
        }
    }
}

impl From<AuditResult> for AuditOutcome {
    fn from(result: AuditResult) -> Self {
        AuditOutcome::Success(result)
    }
}

impl From<AuditError> for AuditOutcome {
    fn from(err: AuditError) -> Self {
        AuditOutcome::Failure(err)
    }
}
