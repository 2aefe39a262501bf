use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名（当前目录）
pub const DEFAULT_CONFIG_FILE: &str = "chinese_extractor.toml";

/// 从 TOML 文件加载配置，缺省项取默认值
pub fn load_config_file(toml_file_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(toml_file_path)
        .with_context(|| format!("无法读取配置文件: {}", toml_file_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("无法解析配置文件: {}", toml_file_path.display()))?;

    Ok(config)
}

/// 确定要读取的配置文件
///
/// 显式路径原样返回（不存在时由加载报错）；未指定时取当前目录下存在的默认文件
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    }
}

/// 加载配置：没有配置文件时使用默认值
///
/// 在日志初始化之前调用，本身不输出日志
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(Config::default()),
    }
}
