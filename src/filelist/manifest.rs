use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::scan::ScanResult;
use crate::utils::{HashResult, format_date};

fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// 清单中的单个文件条目
///
/// 下载、删除和忽略列表共用同一结构，只有下载条目会填充 `md5`、`date`、`size`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub md5: HashResult,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u64,
}

impl FileEntry {
    /// 只包含文件名的条目
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// 补丁程序读取的文件清单
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileList {
    pub version: String,
    #[serde(rename = "downloadprefix")]
    pub download_prefix: String,
    #[serde(default)]
    pub deletes: Vec<FileEntry>,
    #[serde(default)]
    pub downloads: Vec<FileEntry>,
    /// 保留字段，本工具不会填充
    #[serde(default)]
    pub unpacks: Vec<FileEntry>,
}

impl FileList {
    /// 由扫描结果构建清单，没有任何下载文件时视为失败
    pub fn build(
        download_prefix: impl Into<String>,
        scan: ScanResult,
        now: DateTime<Local>,
    ) -> Result<Self> {
        if scan.downloads.is_empty() {
            bail!("目录中没有找到任何文件");
        }

        let version = compute_version(now, scan.downloads.iter().map(|d| d.name.as_str()));

        Ok(Self {
            version,
            download_prefix: download_prefix.into(),
            deletes: scan.deletes,
            downloads: scan.downloads,
            unpacks: Vec::new(),
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("无法序列化文件清单")
    }

    /// 写入清单文件
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = self.to_yaml()?;
        fs::write(path, content).with_context(|| format!("无法写入清单: {:?}", path))?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "下载: {} 个文件, 删除: {} 个文件",
            self.downloads.len(),
            self.deletes.len()
        )
    }
}

/// 计算清单版本号
///
/// 格式为 `YYYYMMDD` 加上 MD5 摘要，摘要先写入当前时刻的纳秒部分，再依次写入每个下载文件名。
/// 同一组文件名在同一时刻得到相同结果，不同运行之间几乎总是不同。
pub fn compute_version<'a>(now: DateTime<Local>, names: impl IntoIterator<Item = &'a str>) -> String {
    let mut context = md5::Context::new();
    context.consume(now.timestamp_subsec_nanos().to_string());
    for name in names {
        context.consume(name);
    }

    format!("{}{}", format_date(now), hex::encode(context.compute().0))
}
