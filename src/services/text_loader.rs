//! 文本读取服务
//!
//! 按 UTF-8 读取 TXT，无法解码的字节直接丢弃

use crate::error::{AppError, AppResult, FileError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 读取文本文件
pub fn load_text(path: &Path) -> AppResult<String> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let bytes =
        fs::read(path).map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
    let text = decode_lossy(&bytes);
    debug!("读取 {}: {} 字符", path.display(), text.chars().count());
    Ok(text)
}

/// 按 UTF-8 解码，只丢弃非法字节序列
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = false;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped |= !chunk.invalid().is_empty();
    }
    if dropped {
        warn!("⚠️ 输入包含无法按 UTF-8 解码的字节，已忽略");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_drops_invalid_bytes() {
        let mut bytes = "1.你好".as_bytes().to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice("。".as_bytes());
        assert_eq!(decode_lossy(&bytes), "1.你好。");
    }

    #[test]
    fn test_decode_keeps_existing_replacement_char() {
        let mut bytes = "甲\u{FFFD}乙".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xE4, 0xB8]);
        bytes.extend_from_slice("丙".as_bytes());
        assert_eq!(decode_lossy(&bytes), "甲\u{FFFD}乙丙");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }

    #[test]
    fn test_load_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "1.你好。\n2.世界。\n").unwrap();
        assert_eq!(load_text(&path).unwrap(), "1.你好。\n2.世界。\n");
    }
}
