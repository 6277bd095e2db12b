//! 状态报告 -> 暂存命令

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::client::VersionControl;
use super::status::StatusLine;
use crate::Result;

/// 一次运行中各类动作的计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StagingSummary {
    pub staged: u64,
    pub removed: u64,
    pub added: u64,
    pub skipped: u64,
}

pub struct StagingBridge<V: VersionControl> {
    vcs: V,
    /// 判断“已存在路径”时使用的根目录
    root: PathBuf,
}

impl<V: VersionControl> StagingBridge<V> {
    pub fn new(vcs: V, root: impl Into<PathBuf>) -> Self {
        Self {
            vcs,
            root: root.into(),
        }
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    pub fn into_vcs(self) -> V {
        self.vcs
    }

    /// 打开状态报告文件并处理
    pub fn run_path<W: Write>(&mut self, status: &Path, out: &mut W) -> Result<StagingSummary> {
        let file = File::open(status)?;
        self.run(BufReader::new(file), out)
    }

    /// 逐行处理状态报告；每个动作向 `out` 输出一行消息并同步调用一次协作者。
    #[tracing::instrument(skip(self, input, out), fields(root = %self.root.display()))]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<StagingSummary> {
        let mut summary = StagingSummary::default();
        for line in input.lines() {
            let line = line?;
            let root = &self.root;
            match StatusLine::classify(&line, |p| root.join(p).exists()) {
                StatusLine::Modified(path) => {
                    writeln!(out, "Committing file: {path}")?;
                    self.vcs.stage(&path);
                    summary.staged += 1;
                }
                StatusLine::Deleted(path) => {
                    writeln!(out, "Deleting file: {path}")?;
                    self.vcs.untrack(&path);
                    summary.removed += 1;
                }
                StatusLine::Untracked(path) => {
                    writeln!(out, "Adding {path} to version control")?;
                    self.vcs.stage(&path);
                    summary.added += 1;
                }
                StatusLine::Other => {
                    debug!(line = %line, "忽略无法识别的行");
                    summary.skipped += 1;
                }
            }
        }
        info!(
            staged = summary.staged,
            removed = summary.removed,
            added = summary.added,
            skipped = summary.skipped,
            "状态报告处理完成"
        );
        Ok(summary)
    }
}
