// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含审计的核心业务逻辑，包括：
/// - 领域模型（models）：审计请求、分数、总结和错误载荷
/// - 服务（services）：审计运行器
///
/// 领域层只依赖进程启动器的抽象接口，不关心具体的进程实现。
pub mod models;
pub mod services;
