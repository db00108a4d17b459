use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::README_FILE;
use super::manifest::{FileEntry, FileList};

const README_HEADER: &str = "Extract the contents of patch.zip to your root EQ directory.\r\n";
const README_DELETES_HEADER: &str = "Also delete the following files:\r\n";

/// 生成补丁压缩包中的 README.txt 内容
pub fn readme_text(deletes: &[FileEntry]) -> String {
    let mut readme = String::from(README_HEADER);
    if !deletes.is_empty() {
        readme.push_str(README_DELETES_HEADER);
        for entry in deletes {
            readme.push_str(&entry.name);
            readme.push_str("\r\n");
        }
    }
    readme
}

/// 将清单中的所有下载文件打包为 zip，并附带 README.txt
///
/// 任何一步失败都会直接返回错误，已写出的部分压缩包保留在磁盘上。
pub fn create_patch_zip(root: &Path, file_list: &FileList, output: &Path) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("无法创建补丁包: {}", output.display()))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for download in &file_list.downloads {
        let source_path = root.join(&download.name);
        // 4 GiB 及以上的文件需要 zip64
        let entry_options = options.large_file(download.size >= u32::MAX as u64);
        writer
            .start_file(download.name.as_str(), entry_options)
            .with_context(|| format!("无法在补丁包中创建 {}", download.name))?;
        let mut source = File::open(&source_path)
            .with_context(|| format!("无法打开文件: {}", source_path.display()))?;
        io::copy(&mut source, &mut writer)
            .with_context(|| format!("无法写入 {} 到补丁包", download.name))?;
    }

    writer
        .start_file(README_FILE, options)
        .context("无法在补丁包中创建 README.txt")?;
    writer
        .write_all(readme_text(&file_list.deletes).as_bytes())
        .context("无法写入 README.txt")?;

    let mut inner = writer.finish().context("无法完成补丁包")?;
    inner.flush().context("无法完成补丁包")?;
    Ok(())
}
