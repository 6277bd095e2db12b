//! 竞争测量数据绘图
//!
//! 读取 `contention.csv`，按 `node` 分组绘制两张折线图：
//! - `tx_rate_kbps` -> `mac_tx_drops`
//! - `tx_rate_kbps` -> `phy_rx_drops`

mod chart;
mod plot;
mod table;

pub use chart::{ChartRenderer, LinePlotSpec, PlottersRenderer};
pub use plot::{plot_contention, MAC_TX_DROPS_PNG, PHY_RX_DROPS_PNG};
pub use table::{Column, ContentionRecord, ContentionTable, GroupBy, Series};

/// 默认输入文件名
pub const DEFAULT_INPUT: &str = "contention.csv";
