use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use super::manifest::FileEntry;

/// 读取忽略列表或删除列表，文件不存在时返回空列表
pub fn load_list(path: &Path) -> Result<Vec<FileEntry>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err).with_context(|| format!("无法打开列表文件: {:?}", path)),
    };

    parse_list(BufReader::new(file)).with_context(|| format!("无法读取列表文件: {:?}", path))
}

/// 按行解析列表: `#` 之后为注释，去除首尾空白后跳过空行
pub fn parse_list<R: BufRead>(reader: R) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let data = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line.as_str(),
        };
        let data = data.trim();
        if data.is_empty() {
            continue;
        }
        entries.push(FileEntry::named(data));
    }

    Ok(entries)
}
