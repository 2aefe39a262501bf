//! 文本导出服务 - 业务能力层
//!
//! 只负责"把一段文本写成 TXT"能力，不关心文本从哪里来

use crate::error::{AppError, AppResult, ExportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 文本导出服务
///
/// 职责：
/// - 拒绝导出空内容
/// - 补全 `.txt` 扩展名；目标是目录时使用默认文件名
/// - 以 UTF-8 写入去掉首尾空白的内容
#[derive(Debug, Clone)]
pub struct TextExporter {
    default_file_name: String,
}

impl TextExporter {
    /// 使用默认文件名创建
    pub fn new() -> Self {
        Self::with_default_name("提取结果.txt")
    }

    /// 使用自定义默认文件名创建
    pub fn with_default_name(name: impl Into<String>) -> Self {
        Self {
            default_file_name: name.into(),
        }
    }

    pub fn default_file_name(&self) -> &str {
        &self.default_file_name
    }

    /// 计算最终写入路径
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        let mut target = if path.is_dir() {
            path.join(&self.default_file_name)
        } else {
            path.to_path_buf()
        };

        if target.extension().is_none() {
            target.set_extension("txt");
        }
        target
    }

    /// 写入文本
    ///
    /// # 返回
    /// 返回实际写入的路径
    pub fn write_text(&self, path: &Path, content: &str) -> AppResult<PathBuf> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ExportError::EmptyContent.into());
        }

        let target = self.resolve_path(path);
        debug!(
            "导出: {} | 字符数: {}",
            target.display(),
            content.chars().count()
        );

        fs::write(&target, content)
            .map_err(|e| AppError::file_write_failed(target.display().to_string(), e))?;

        info!("✓ 已导出: {}", target.display());
        Ok(target)
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}
