//! 按状态报告暂存文件
//!
//! 读取 `git status` 的输出快照，对 modified/deleted/未跟踪文件分别执行 `git add` / `git rm`

use clap::Parser;
use netstudy_rs::vcs::{DryRunClient, GitClient, StagingBridge, VersionControl, DEFAULT_STATUS_FILE};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "commit-changes", about = "根据 status.txt 执行 git add / git rm")]
struct Args {
    /// 状态报告文件
    #[arg(long, default_value = DEFAULT_STATUS_FILE)]
    status: PathBuf,
    /// 仓库目录（git 命令的工作目录，也是未跟踪路径的判断基准）
    #[arg(long, default_value = ".")]
    repo: PathBuf,
    #[arg(long, default_value = "git")]
    git: String,
    /// 只打印将要执行的动作
    #[arg(long)]
    dry_run: bool,
}

fn run<V: VersionControl>(vcs: V, args: &Args) -> netstudy_rs::Result<()> {
    let mut bridge = StagingBridge::new(vcs, &args.repo);
    let stdout = io::stdout();
    bridge.run_path(&args.status, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let result = if args.dry_run {
        run(DryRunClient, &args)
    } else {
        run(GitClient::new(&args.git, &args.repo), &args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(status = %args.status.display(), "{err}");
            ExitCode::FAILURE
        }
    }
}
