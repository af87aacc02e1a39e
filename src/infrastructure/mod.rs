// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与文件系统交互：
/// - 报告产物（artifact）：外部工具写入报告的临时位置
/// - 报告解析（report）：把Lighthouse JSON转换为类别分数
pub mod artifact;
pub mod report;
