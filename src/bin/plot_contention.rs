//! 竞争测量绘图
//!
//! 读取 contention.csv，输出 mac_tx_drops.png 与 phy_rx_drops.png

use clap::Parser;
use netstudy_rs::contention::{plot_contention, ContentionTable, PlottersRenderer, DEFAULT_INPUT};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "plot-contention", about = "按 node 绘制 tx_rate_kbps 与丢包数的折线图")]
struct Args {
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// 图片输出目录
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn run(args: &Args) -> netstudy_rs::Result<()> {
    let table = ContentionTable::from_path(&args.input)?;
    let mut renderer = PlottersRenderer {
        width: args.width,
        height: args.height,
    };
    plot_contention(&table, &mut renderer, &args.out_dir)?;
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

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(input = %args.input.display(), "{err}");
            ExitCode::FAILURE
        }
    }
}
