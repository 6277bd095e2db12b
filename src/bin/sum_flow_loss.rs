//! 逐流丢包汇总
//!
//! 对 traffic_study_per_flow_stats.csv 最后一列求和并打印

use clap::Parser;
use netstudy_rs::flow::{sum_lost_packets_path, DEFAULT_INPUT};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "sum-flow-loss", about = "统计所有流的丢包总数")]
struct Args {
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// 以 JSON 输出 {"lost_packets":N,"flows":M}
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> netstudy_rs::Result<()> {
    let total = sum_lost_packets_path(&args.input)?;
    if args.json {
        println!("{}", serde_json::to_string(&total)?);
    } else {
        println!("{}", total.lost_packets);
    }
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
