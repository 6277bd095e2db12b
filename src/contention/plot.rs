use std::fs;
use std::path::{Path, PathBuf};

use super::chart::{ChartRenderer, LinePlotSpec};
use super::table::{Column, ContentionTable, GroupBy};
use crate::Result;

pub const MAC_TX_DROPS_PNG: &str = "mac_tx_drops.png";
pub const PHY_RX_DROPS_PNG: &str = "phy_rx_drops.png";

/// 依次渲染 MAC 发送丢包图和 PHY 接收丢包图，返回生成的文件路径。
pub fn plot_contention<R: ChartRenderer>(
    table: &ContentionTable,
    renderer: &mut R,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let plots = [
        (Column::MacTxDrops, MAC_TX_DROPS_PNG),
        (Column::PhyRxDrops, PHY_RX_DROPS_PNG),
    ];
    let mut outputs = Vec::with_capacity(plots.len());
    for (y, file_name) in plots {
        let spec = LinePlotSpec {
            x: Column::TxRateKbps,
            y,
            group_by: GroupBy::Node,
            output: out_dir.join(file_name),
        };
        renderer.render_line_plot(table, &spec)?;
        outputs.push(spec.output);
    }
    Ok(outputs)
}
