// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 审计请求、类别分数、定性总结以及成功/失败两种结果载荷
pub mod audit;
