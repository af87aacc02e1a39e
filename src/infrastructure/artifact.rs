// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REPORT_FILE_NAME: &str = "lighthouse-report.json";

/// 报告产物
///
/// 在独立临时目录中分配报告路径。文件本身由外部工具创建，
/// 目录在值被丢弃时整体删除，覆盖所有终止路径。
#[derive(Debug)]
pub struct ReportArtifact {
    dir: TempDir,
    path: PathBuf,
}

impl ReportArtifact {
    /// 分配新的报告位置
    pub fn allocate() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("auditrs-").tempdir()?;
        Ok(Self::in_dir(dir))
    }

    /// 在指定父目录下分配（测试使用）
    pub fn allocate_in(parent: impl AsRef<Path>) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("auditrs-")
            .tempdir_in(parent)?;
        Ok(Self::in_dir(dir))
    }

    fn in_dir(dir: TempDir) -> Self {
        let path = dir.path().join(REPORT_FILE_NAME);
        Self { dir, path }
    }

    /// 报告文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 所在临时目录
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// 外部工具是否已经写出报告
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// 读取报告内容
    pub async fn read(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }

    /// 删除报告文件，文件不存在时不报错
    pub async fn remove_file(&self) -> io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
