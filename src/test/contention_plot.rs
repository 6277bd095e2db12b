use std::fs;
use std::io::Cursor;

use crate::contention::{
    plot_contention, ChartRenderer, Column, ContentionRecord, ContentionTable, GroupBy,
    LinePlotSpec, PlottersRenderer, MAC_TX_DROPS_PNG, PHY_RX_DROPS_PNG,
};

#[derive(Debug, Default)]
struct RecordingRenderer {
    specs: Vec<LinePlotSpec>,
}

impl ChartRenderer for RecordingRenderer {
    fn render_line_plot(&mut self, _table: &ContentionTable, spec: &LinePlotSpec) -> crate::Result<()> {
        self.specs.push(spec.clone());
        Ok(())
    }
}

/// 两个节点，各 5 个速率采样
fn two_node_table() -> ContentionTable {
    let mut records = Vec::new();
    for (offset, node) in [(0.0, "0"), (40.0, "1")] {
        for step in 1..=5 {
            let rate = f64::from(step) * 100.0;
            records.push(ContentionRecord {
                node: node.to_string(),
                tx_rate_kbps: rate,
                mac_tx_drops: rate / 10.0 + offset,
                phy_rx_drops: rate / 20.0 + offset,
            });
        }
    }
    ContentionTable::new(records)
}

#[test]
fn plot_contention_requests_both_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut renderer = RecordingRenderer::default();
    let outputs =
        plot_contention(&two_node_table(), &mut renderer, dir.path()).expect("plot contention");

    assert_eq!(
        outputs,
        vec![dir.path().join(MAC_TX_DROPS_PNG), dir.path().join(PHY_RX_DROPS_PNG)]
    );
    assert_eq!(
        renderer.specs,
        vec![
            LinePlotSpec {
                x: Column::TxRateKbps,
                y: Column::MacTxDrops,
                group_by: GroupBy::Node,
                output: dir.path().join(MAC_TX_DROPS_PNG),
            },
            LinePlotSpec {
                x: Column::TxRateKbps,
                y: Column::PhyRxDrops,
                group_by: GroupBy::Node,
                output: dir.path().join(PHY_RX_DROPS_PNG),
            },
        ]
    );
}

/// 与某条折线颜色接近的像素个数（线条边缘会与白底混合）
fn pixels_near(img: &image::RgbImage, (r, g, b): (u8, u8, u8)) -> usize {
    img.pixels()
        .filter(|p| {
            let [pr, pg, pb] = p.0;
            pr.abs_diff(r) <= 40 && pg.abs_diff(g) <= 40 && pb.abs_diff(b) <= 40
        })
        .count()
}

#[test]
fn plotters_renderer_writes_png_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_dir = dir.path().join("plots");
    let mut renderer = PlottersRenderer {
        width: 320,
        height: 240,
    };
    let outputs =
        plot_contention(&two_node_table(), &mut renderer, &out_dir).expect("plot contention");

    assert_eq!(outputs.len(), 2);
    for path in outputs {
        let bytes = fs::read(&path).expect("read png");
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());

        let img = image::open(&path).expect("decode png").to_rgb8();
        assert_eq!(img.dimensions(), (320, 240));
        // 两个 node 各占一种调色板颜色
        for color in [(230, 25, 75), (60, 180, 75)] {
            assert!(
                pixels_near(&img, color) > 0,
                "{}: no line drawn in {color:?}",
                path.display()
            );
        }
    }
}

#[test]
fn plotters_renderer_handles_empty_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = ContentionTable::from_reader(Cursor::new(
        "node,tx_rate_kbps,mac_tx_drops,phy_rx_drops\n",
    ))
    .expect("load table");
    let outputs = plot_contention(&table, &mut PlottersRenderer::default(), dir.path())
        .expect("plot empty table");
    assert!(outputs.iter().all(|p| p.exists()));
}
