use anyhow::{Result, anyhow};
use clap::Parser;

use filelistbuilder::cli::Cli;
use filelistbuilder::filelist::{CONFIG_FILE, Config, HASH_FILE, build_filelist, write_exe_hash};
use filelistbuilder::logger;

fn run(cli: Cli) -> Result<()> {
    tracing::info!("filelistbuilder v{}", env!("CARGO_PKG_VERSION"));
    if !cli.extra.is_empty() {
        tracing::warn!(args = ?cli.extra, "忽略多余的参数");
    }

    if !cli.directory.is_dir() {
        return Err(anyhow!("目录不存在: {:?}", cli.directory));
    }

    let config_path = cli
        .config
        .unwrap_or_else(|| cli.directory.join(CONFIG_FILE));
    let config = Config::resolve(cli.client, cli.download_prefix, &config_path)?;

    if let Some(exe_path) = &cli.exe_path {
        tracing::info!(exe = %exe_path.display(), "计算可执行文件哈希");
        write_exe_hash(exe_path, &cli.directory.join(HASH_FILE));
    }

    let summary = build_filelist(&cli.directory, &config)?;

    println!(
        "Wrote {} and {} with {} files inside.",
        summary.manifest_path.display(),
        summary.patch_path.display(),
        summary.file_list.downloads.len()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logger::init(&cli.log_level);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
