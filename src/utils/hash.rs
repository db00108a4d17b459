use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 十六进制格式的文件摘要
pub type HashResult = String;

/// 计算文件的 MD5 校验和 (小写十六进制)
pub fn compute_file_hash(path: &Path) -> Result<HashResult> {
    let file = File::open(path).with_context(|| format!("无法打开文件: {:?}", path))?;
    let mut reader = BufReader::new(file);
    let mut context = md5::Context::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .with_context(|| format!("无法读取文件: {:?}", path))?;
        if bytes_read == 0 {
            break;
        }
        context.consume(&buffer[..bytes_read]);
    }

    Ok(hex::encode(context.compute().0))
}
