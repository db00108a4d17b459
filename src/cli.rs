use clap::Parser;
use std::path::PathBuf;

/// 补丁程序文件清单生成工具
#[derive(Parser)]
#[command(name = "filelistbuilder", version)]
#[command(about = "扫描目录，生成补丁程序使用的文件清单和 patch.zip", long_about = None)]
pub struct Cli {
    /// 客户端名称，用于清单文件名 filelist_<client>.yml
    pub client: Option<String>,
    /// 下载地址前缀
    pub download_prefix: Option<String>,
    /// 补丁程序可执行文件，计算其哈希写入 eqemupatcher-hash.txt
    pub exe_path: Option<PathBuf>,
    /// 多余的位置参数，忽略
    #[arg(hide = true)]
    pub extra: Vec<String>,
    /// 要扫描的目录，输出文件也写入该目录
    #[arg(short = 'C', long = "directory", default_value = ".")]
    pub directory: PathBuf,
    /// 配置文件路径 (默认为扫描目录下的 filelistbuilder.yml)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// 日志级别，RUST_LOG 优先
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
