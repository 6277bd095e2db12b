use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// 汇总结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LossTotal {
    pub lost_packets: i64,
    /// 参与求和的数据行数（不含表头）
    pub flows: u64,
}

pub fn sum_lost_packets_path(path: &Path) -> Result<LossTotal> {
    let file = File::open(path)?;
    sum_lost_packets(file)
}

/// 跳过第一行表头，把其余每行最后一个字段按整数累加。
///
/// 各行字段数可以不同；任何一行的最后字段不是整数、或表头之后出现空行，都会直接失败。
/// csv 解析器会静默丢弃空行，所以整个输入先读入内存，按记录之间的字节偏移检查空行。
#[tracing::instrument(skip(reader))]
pub fn sum_lost_packets<R: Read>(mut reader: R) -> Result<LossTotal> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_slice());

    let mut total = LossTotal::default();
    let mut record = csv::StringRecord::new();
    let mut seen_header = false;
    loop {
        let pos = rdr.position().clone();
        if seen_header && blank_line_at(&raw, pos.byte()) {
            return Err(Error::MissingField { row: pos.line() });
        }
        if !rdr.read_record(&mut record)? {
            break;
        }
        if !seen_header {
            seen_header = true;
            continue;
        }

        // 行号从 1 开始，表头占第 1 行
        let row = record.position().map(|p| p.line()).unwrap_or(pos.line());
        let field = record.iter().last().ok_or(Error::MissingField { row })?;
        let lost: i64 = field
            .trim()
            .parse()
            .map_err(|_| Error::InvalidLossCount {
                row,
                value: field.to_string(),
            })?;
        total.lost_packets = total
            .lost_packets
            .checked_add(lost)
            .ok_or(Error::Overflow { row })?;
        total.flows += 1;
    }
    debug!(flows = total.flows, lost_packets = total.lost_packets, "汇总完成");
    Ok(total)
}

/// 上一条记录结束于 `offset`；跳过 CRLF 残留的 `\n` 后若紧跟换行符，说明中间有空行。
fn blank_line_at(raw: &[u8], offset: u64) -> bool {
    let Ok(mut i) = usize::try_from(offset) else {
        return false;
    };
    if i > 0 && raw.get(i - 1) == Some(&b'\r') && raw.get(i) == Some(&b'\n') {
        i += 1;
    }
    matches!(raw.get(i), Some(b'\n' | b'\r'))
}
