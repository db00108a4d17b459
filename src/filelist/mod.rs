mod archive;
mod config;
mod lists;
mod manifest;
mod scan;

use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

pub use archive::{create_patch_zip, readme_text};
pub use config::{Config, write_exe_hash};
pub use lists::{load_list, parse_list};
pub use manifest::{FileEntry, FileList, compute_version};
pub use scan::{ScanResult, is_infrastructure, scan_directory};

/// 默认配置文件
pub const CONFIG_FILE: &str = "filelistbuilder.yml";
/// 忽略列表，在扫描前读取
pub const IGNORE_FILE: &str = "ignore.txt";
/// 删除列表，在扫描过程中发现
pub const DELETE_FILE: &str = "delete.txt";
/// 补丁压缩包
pub const PATCH_FILE: &str = "patch.zip";
/// 补丁压缩包中的说明文件
pub const README_FILE: &str = "README.txt";
/// 补丁程序可执行文件哈希
pub const HASH_FILE: &str = "eqemupatcher-hash.txt";

/// 一次运行的输出
#[derive(Debug)]
pub struct Summary {
    pub manifest_path: PathBuf,
    pub patch_path: PathBuf,
    pub file_list: FileList,
}

/// 扫描 `root` 并在其中生成文件清单和补丁包
pub fn build_filelist(root: &Path, config: &Config) -> Result<Summary> {
    let ignores = load_list(&root.join(IGNORE_FILE))?;
    tracing::info!(count = ignores.len(), "读取忽略列表");

    tracing::info!(root = %root.display(), "正在扫描目录...");
    let scan = scan_directory(root, &ignores)?;

    let file_list = FileList::build(config.download_prefix.as_str(), scan, Local::now())?;
    tracing::info!(version = %file_list.version, "{}", file_list.summary());

    let manifest_path = root.join(config.manifest_file_name());
    file_list.write(&manifest_path)?;

    tracing::info!("正在创建补丁包...");
    let patch_path = root.join(PATCH_FILE);
    create_patch_zip(root, &file_list, &patch_path)?;

    Ok(Summary {
        manifest_path,
        patch_path,
        file_list,
    })
}
