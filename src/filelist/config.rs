use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::utils::compute_file_hash;

/// 运行配置，来自命令行参数或 `filelistbuilder.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: String,
    #[serde(default, rename = "downloadprefix")]
    pub download_prefix: String,
}

impl Config {
    pub fn new(client: impl Into<String>, download_prefix: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            download_prefix: download_prefix.into(),
        }
    }

    /// 从 YAML 配置文件读取
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("无法读取配置文件: {:?}", path))?;
        let config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("无法解析配置文件: {:?}", path))?;
        Ok(config)
    }

    /// 同时提供 client 和 downloadprefix 参数时直接使用，否则读取配置文件
    pub fn resolve(
        client: Option<String>,
        download_prefix: Option<String>,
        config_path: &Path,
    ) -> Result<Self> {
        let config = match (client, download_prefix) {
            (Some(client), Some(download_prefix)) => {
                tracing::info!(client = %client, downloadprefix = %download_prefix, "使用命令行参数");
                Self::new(client, download_prefix)
            }
            (client, _) => {
                if let Some(client) = client {
                    tracing::warn!(client = %client, "缺少 downloadprefix 参数，忽略命令行参数");
                }
                tracing::info!(path = %config_path.display(), "读取配置文件");
                Self::load(config_path)?
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.client.is_empty() {
            bail!("未设置 client: 请在 filelistbuilder.yml 或命令行参数中提供");
        }
        if self.download_prefix.is_empty() {
            bail!("未设置 downloadprefix: 请在 filelistbuilder.yml 或命令行参数中提供");
        }
        Ok(())
    }

    /// 清单文件名 `filelist_<client>.yml`
    pub fn manifest_file_name(&self) -> String {
        format!("filelist_{}.yml", self.client)
    }
}

/// 计算补丁程序可执行文件的 MD5 并以大写形式写入 `dest`
///
/// 失败只记录警告，不影响后续流程。返回是否写入成功。
pub fn write_exe_hash(exe: &Path, dest: &Path) -> bool {
    let hash = match compute_file_hash(exe) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::warn!(exe = %exe.display(), error = %err, "忽略: 无法计算可执行文件哈希");
            return false;
        }
    };

    match fs::write(dest, hash.to_uppercase()) {
        Ok(()) => {
            tracing::info!(path = %dest.display(), hash = %hash.to_uppercase(), "写入可执行文件哈希");
            true
        }
        Err(err) => {
            tracing::warn!(path = %dest.display(), error = %err, "忽略: 无法写入哈希文件");
            false
        }
    }
}
