//! 日志工具模块
//!
//! 提供日志初始化、运行日志文件以及格式化输出的辅助函数

use crate::models::extraction::{ConversionStatus, Extraction};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则默认 `info`，详细模式下为 `debug`。日志写到 stderr，
/// 以免与输出到 stdout 的提取结果混在一起
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 初始化运行日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n中文提取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法创建日志文件: {}", log_file_path))?;
    Ok(())
}

/// 向运行日志文件追加一次提取的摘要
pub fn append_run_record(log_file_path: &str, source: &str, extraction: &Extraction) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;

    let record = format!(
        "[{}] 来源: {} | 段落 {} | 保留 {} | 字符 {} | 转换: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        source,
        extraction.stats.paragraphs,
        extraction.stats.kept,
        extraction.text.chars().count(),
        describe_conversion(&extraction.conversion)
    );
    file.write_all(record.as_bytes())?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(mode_label: &str, backend: Option<&str>) {
    info!("{}", "=".repeat(60));
    info!("🚀 中文提取 + 简繁转换");
    info!("🔁 转换方向: {}", mode_label);
    info!("🧩 转换后端: {}", backend.unwrap_or("无"));
    info!("{}", "=".repeat(60));
}

/// 打印一次提取的统计信息
pub fn log_run_summary(extraction: &Extraction) {
    let stats = &extraction.stats;
    info!("{}", "─".repeat(60));
    info!(
        "📊 段落 {} | 保留 {} | 去序号 {} | 删括号 {} | 跳过说明行 {}",
        stats.paragraphs,
        stats.kept,
        stats.ordinals_stripped,
        stats.brackets_removed,
        stats.annotation_lines
    );
    info!("🔁 {}", describe_conversion(&extraction.conversion));
    info!("📝 结果: {}", truncate_text(&extraction.text, 60));
    info!("{}", "─".repeat(60));
}

fn describe_conversion(status: &ConversionStatus) -> String {
    match status {
        ConversionStatus::NotRequested => "未转换".to_string(),
        ConversionStatus::Converted { backend, target } => {
            format!("已转换为{} ({})", target, backend)
        }
        ConversionStatus::Unavailable { target } => {
            format!("未能转换为{}（无可用后端）", target)
        }
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
