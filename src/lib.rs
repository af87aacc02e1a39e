// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理审计工具的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含审计结果模型和审计服务
pub mod domain;

/// 引擎模块
///
/// 外部进程启动器和Lighthouse命令构造
pub mod engines;

/// 基础设施模块
///
/// 临时报告文件和报告解析
pub mod infrastructure;

/// 表示层模块
///
/// 命令行参数解析和JSON输出
pub mod presentation;

/// 工具模块
///
/// 日志初始化和错误类型
pub mod utils;
