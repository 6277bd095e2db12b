//! 内存中的竞争测量表

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::Result;

/// CSV 中的一行；多余的列会被忽略
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentionRecord {
    pub node: String,
    pub tx_rate_kbps: f64,
    pub mac_tx_drops: f64,
    pub phy_rx_drops: f64,
}

/// 可作为坐标轴的数值列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    TxRateKbps,
    MacTxDrops,
    PhyRxDrops,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::TxRateKbps => "tx_rate_kbps",
            Column::MacTxDrops => "mac_tx_drops",
            Column::PhyRxDrops => "phy_rx_drops",
        }
    }

    pub fn value(self, rec: &ContentionRecord) -> f64 {
        match self {
            Column::TxRateKbps => rec.tx_rate_kbps,
            Column::MacTxDrops => rec.mac_tx_drops,
            Column::PhyRxDrops => rec.phy_rx_drops,
        }
    }
}

/// 分组（上色）所用的类别列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Node,
}

impl GroupBy {
    pub fn name(self) -> &'static str {
        match self {
            GroupBy::Node => "node",
        }
    }

    fn key(self, rec: &ContentionRecord) -> &str {
        match self {
            GroupBy::Node => &rec.node,
        }
    }
}

/// 一条折线：同一分组内按 x 升序的点
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Default)]
pub struct ContentionTable {
    records: Vec<ContentionRecord>,
}

impl ContentionTable {
    pub fn new(records: Vec<ContentionRecord>) -> Self {
        Self { records }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// 一次性读入整张表；任何缺列或无法解析的行都会直接返回错误。
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records: Vec<ContentionRecord> = Vec::new();
        for row in rdr.deserialize() {
            records.push(row?);
        }
        debug!(rows = records.len(), "加载竞争测量表");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ContentionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 按分组列拆分为多条折线，分组按名称排序。
    ///
    /// 同一分组内 x 相同的多个样本取 y 的平均值。
    pub fn series(&self, x: Column, y: Column, group_by: GroupBy) -> Vec<Series> {
        let mut groups: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
        for rec in &self.records {
            groups
                .entry(group_by.key(rec))
                .or_default()
                .push((x.value(rec), y.value(rec)));
        }

        groups
            .into_iter()
            .map(|(label, mut points)| {
                points.sort_by(|a, b| a.0.total_cmp(&b.0));
                Series {
                    label: label.to_string(),
                    points: mean_by_x(&points),
                }
            })
            .collect()
    }
}

/// 输入须已按 x 排序
fn mean_by_x(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    let mut count = 0u32;
    let mut sum = 0.0;
    for &(x, y) in points {
        if let Some(last) = out.last_mut().filter(|last| last.0 == x) {
            count += 1;
            sum += y;
            last.1 = sum / f64::from(count);
            continue;
        }
        count = 1;
        sum = y;
        out.push((x, y));
    }
    out
}
