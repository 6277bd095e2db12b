//! 错误类型
//!
//! 三个工具共用的错误定义。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 数据行的最后一列不是整数
    #[error("row {row}: last field {value:?} is not an integer")]
    InvalidLossCount { row: u64, value: String },

    /// 数据行没有任何字段
    #[error("row {row}: no fields")]
    MissingField { row: u64 },

    #[error("lost packet total overflowed at row {row}")]
    Overflow { row: u64 },

    #[error("chart render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
