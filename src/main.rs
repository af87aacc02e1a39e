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

use auditrs::presentation::cli::{self, Invocation};
use auditrs::utils::telemetry;
use std::process::ExitCode;
use tracing::error;

/// 主函数
///
/// 解析参数、执行一次审计，并向标准输出打印唯一的JSON对象
#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Parse arguments
    let request = match cli::parse_args(std::env::args_os()) {
        Invocation::Audit(request) => request,
        Invocation::Usage(err) => return cli::print_usage_error(&err),
        Invocation::Info(info) => info.exit(),
    };

    // 3. Run the audit
    match cli::run(request).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Audit aborted");
            cli::print_fatal(&e)
        }
    }
}
