//! # Filelist Builder
//!
//! 游戏客户端补丁程序的文件清单生成工具
//!
//! ## 功能
//!
//! - 扫描目录，计算每个文件的 MD5、大小和修改日期
//! - 支持 `ignore.txt` 忽略列表和 `delete.txt` 删除列表
//! - 生成 `filelist_<client>.yml` 清单，版本号每次运行都会变化
//! - 将所有文件打包为 `patch.zip`，附带 `README.txt` 说明
//!
//! ## 使用示例
//!
//! ```no_run
//! use filelistbuilder::filelist::{Config, build_filelist};
//! use std::path::Path;
//!
//! let config = Config::new("rof", "http://patch.example.com/rof/");
//! let summary = build_filelist(Path::new("."), &config).unwrap();
//! println!("{}", summary.file_list.summary());
//! ```

pub mod cli;
pub mod filelist;
pub mod logger;
pub mod utils;

// 重新导出常用类型
pub use filelist::{Config, FileEntry, FileList, ScanResult, Summary};
pub use filelist::{build_filelist, create_patch_zip, scan_directory};
