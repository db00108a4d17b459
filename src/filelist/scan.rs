use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

use super::lists::load_list;
use super::manifest::FileEntry;
use super::{DELETE_FILE, PATCH_FILE};
use crate::utils::{compute_file_hash, modified_date, relative_name};

/// 路径中包含这些片段的文件永远不会进入清单
const INFRASTRUCTURE_PATTERNS: &[&str] = &[
    "eqemupatcher.exe",
    "README.md",
    ".gitignore",
    ".DS_Store",
    "filelistbuilder",
    "filelist",
    "ignore.txt",
    "-hash.txt",
];

/// 扫描结果
#[derive(Debug, Default)]
pub struct ScanResult {
    pub downloads: Vec<FileEntry>,
    pub deletes: Vec<FileEntry>,
}

/// 判断是否为补丁程序或本工具自身的文件
pub fn is_infrastructure(name: &str) -> bool {
    name == PATCH_FILE
        || INFRASTRUCTURE_PATTERNS
            .iter()
            .any(|pattern| name.contains(pattern))
}

/// 扫描目录，收集下载文件和删除列表
///
/// 遍历按文件名排序，结果在同一目录树上保持稳定。遍历或计算哈希时的任何错误都会中止扫描。
pub fn scan_directory(root: &Path, ignores: &[FileEntry]) -> Result<ScanResult> {
    let ignored: HashSet<&str> = ignores.iter().map(|e| e.name.as_str()).collect();
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("无法遍历目录: {:?}", root))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let name = relative_name(root, path)?;

        if is_infrastructure(&name) {
            tracing::debug!(file = %name, "跳过工具文件");
            continue;
        }
        if ignored.contains(name.as_str()) {
            tracing::debug!(file = %name, "忽略");
            continue;
        }
        if name == DELETE_FILE {
            result.deletes = load_list(path)?;
            tracing::debug!(count = result.deletes.len(), "读取删除列表");
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("无法读取文件信息: {:?}", path))?;
        let md5 = compute_file_hash(path)?;
        let date = modified_date(&metadata).with_context(|| format!("文件: {:?}", path))?;

        tracing::debug!(file = %name, md5 = %md5, "+");
        result.downloads.push(FileEntry {
            name,
            md5,
            date,
            size: metadata.len(),
        });
    }

    Ok(result)
}
