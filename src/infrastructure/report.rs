// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::audit::{safe_score, Category, CategoryScores};
use serde::Deserialize;
use std::collections::HashMap;

/// Lighthouse JSON报告中用到的部分
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LighthouseReport {
    /// 类别键到类别条目的映射
    #[serde(default)]
    pub categories: HashMap<String, CategoryEntry>,
}

/// 单个类别条目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryEntry {
    /// [0.0, 1.0] 之间的分数，可能为 null
    #[serde(default)]
    pub score: Option<f64>,
}

impl LighthouseReport {
    /// 从JSON文本解析报告
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// 某个类别的原始分数
    pub fn raw_score(&self, category: Category) -> Option<f64> {
        self.categories
            .get(category.report_key())
            .and_then(|entry| entry.score)
    }

    /// 计算四个类别的百分比分数
    pub fn scores(&self) -> CategoryScores {
        let mut scores = CategoryScores::default();
        for category in Category::ALL {
            scores.set(category, safe_score(self.raw_score(category)));
        }
        scores
    }
}
