// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理审计工具的配置设置，包括外部工具、超时和进程启动方式
pub mod settings;
