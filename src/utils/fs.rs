use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::path::Path;

/// 清单与压缩包中使用的日期格式
pub const DATE_FORMAT: &str = "%Y%m%d";

/// 获取相对于根目录的文件名，统一使用 `/` 作为分隔符
pub fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("无法获取相对路径: {:?}", path))?;

    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .with_context(|| format!("文件名不是有效的 UTF-8: {:?}", path))?;
    Ok(parts.join("/"))
}

/// 将文件修改时间格式化为 YYYYMMDD (本地时间)
pub fn modified_date(metadata: &Metadata) -> Result<String> {
    let modified = metadata.modified().context("无法读取文件修改时间")?;
    Ok(format_date(DateTime::<Local>::from(modified)))
}

pub fn format_date(time: DateTime<Local>) -> String {
    time.format(DATE_FORMAT).to_string()
}
