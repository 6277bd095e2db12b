//! 逐流统计汇总
//!
//! 对 `traffic_study_per_flow_stats.csv` 的最后一列（丢包数）求和。

mod loss;

pub use loss::{sum_lost_packets, sum_lost_packets_path, LossTotal};

/// 默认输入文件名
pub const DEFAULT_INPUT: &str = "traffic_study_per_flow_stats.csv";
