//! 版本控制协作者接口

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

/// 暂存桥所需的最小版本控制 API。
///
/// 调用是“发出即忘”：失败不会返回给调用方，也不会重试。
pub trait VersionControl {
    fn stage(&mut self, path: &str);
    fn untrack(&mut self, path: &str);
}

/// 通过外部 `git` 进程执行暂存/移除
#[derive(Debug, Clone)]
pub struct GitClient {
    program: OsString,
    repo: PathBuf,
}

impl GitClient {
    pub fn new(program: impl Into<OsString>, repo: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }

    fn call(&self, subcommand: &str, path: &str) {
        let result = Command::new(&self.program)
            .arg(subcommand)
            .arg("--")
            .arg(path)
            .current_dir(&self.repo)
            .status();
        match result {
            Ok(status) if status.success() => {
                debug!(subcommand, path, "git 命令完成");
            }
            Ok(status) => {
                warn!(subcommand, path, code = ?status.code(), "git 命令返回非零状态");
            }
            Err(err) => {
                warn!(subcommand, path, error = %err, "无法启动 git 进程");
            }
        }
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new("git", ".")
    }
}

impl VersionControl for GitClient {
    fn stage(&mut self, path: &str) {
        self.call("add", path);
    }

    fn untrack(&mut self, path: &str) {
        self.call("rm", path);
    }
}

/// `--dry-run`：只打印消息，不调用任何外部命令
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunClient;

impl VersionControl for DryRunClient {
    fn stage(&mut self, path: &str) {
        debug!(path, "dry-run: skip git add");
    }

    fn untrack(&mut self, path: &str) {
        debug!(path, "dry-run: skip git rm");
    }
}
