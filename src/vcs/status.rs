//! 状态报告行分类

/// 状态报告中一行的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// `modified: <path>`，需要 stage
    Modified(String),
    /// `deleted: <path>`，需要从版本控制中移除
    Deleted(String),
    /// 去掉空白后恰好是一个已存在的路径（未跟踪文件）
    Untracked(String),
    /// 其他行，忽略
    Other,
}

impl StatusLine {
    /// 对一行进行分类。
    ///
    /// 先去掉行内所有空白字符；标签取第一个 `:` 之前的部分，路径取其后的全部内容，
    /// 因此路径本身可以包含 `:`。没有 `:` 的行交给 `exists` 判断是否为已存在路径。
    pub fn classify(line: &str, exists: impl Fn(&str) -> bool) -> Self {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return StatusLine::Other;
        }

        if let Some((tag, path)) = compact.split_once(':') {
            if tag.contains("modified") {
                return Self::tagged(path, StatusLine::Modified);
            }
            if tag.contains("deleted") {
                return Self::tagged(path, StatusLine::Deleted);
            }
        }

        if exists(&compact) {
            StatusLine::Untracked(compact)
        } else {
            StatusLine::Other
        }
    }

    fn tagged(path: &str, make: fn(String) -> StatusLine) -> Self {
        if path.is_empty() {
            StatusLine::Other
        } else {
            make(path.to_string())
        }
    }
}
