//! 版本控制暂存桥
//!
//! 读取预先生成的 `git status` 报告，按每行的变更类型调用 `git add` / `git rm`。

mod bridge;
mod client;
mod status;

pub use bridge::{StagingBridge, StagingSummary};
pub use client::{DryRunClient, GitClient, VersionControl};
pub use status::StatusLine;

/// 默认的状态报告文件名
pub const DEFAULT_STATUS_FILE: &str = "status.txt";
