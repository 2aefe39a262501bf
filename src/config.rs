use crate::error::{AppResult, ConfigError};
use crate::models::paragraph::ParagraphSplit;
use crate::models::script::ConvertMode;
use serde::Deserialize;

/// 程序配置
///
/// 优先级（从低到高）：默认值 → TOML 配置文件 → 环境变量 → 命令行参数
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 转换方向
    pub convert_mode: ConvertMode,
    /// 段落切分方式
    pub paragraph_split: ParagraphSplit,
    /// 只保留中文、英文数字和中文标点
    pub strict_charset: bool,
    /// 简繁转换后端的优先顺序，第一个可用的生效
    pub converter_backends: Vec<String>,
    /// 导出时的默认文件名
    pub default_export_name: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件（可选）
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convert_mode: ConvertMode::T2S,
            paragraph_split: ParagraphSplit::Line,
            strict_charset: false,
            converter_backends: vec!["zhconv".to_string(), "table".to_string()],
            default_export_name: "提取结果.txt".to_string(),
            verbose_logging: false,
            log_file: None,
        }
    }
}

impl Config {
    /// 用环境变量覆盖当前配置
    ///
    /// `lookup` 按变量名取值，便于测试时注入
    pub fn apply_env<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CONVERT_MODE") {
            self.convert_mode = v.parse()?;
        }
        if let Some(v) = lookup("PARAGRAPH_SPLIT") {
            self.paragraph_split = v.parse()?;
        }
        if let Some(v) = lookup("STRICT_CHARSET") {
            self.strict_charset = parse_bool("STRICT_CHARSET", &v)?;
        }
        if let Some(v) = lookup("CONVERTER_BACKENDS") {
            self.converter_backends = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(v) = lookup("DEFAULT_EXPORT_NAME") {
            self.default_export_name = v;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_bool("VERBOSE_LOGGING", &v)?;
        }
        if let Some(v) = lookup("EXTRACT_LOG_FILE") {
            self.log_file = Some(v).filter(|s| !s.is_empty());
        }
        Ok(self)
    }
}

fn parse_bool(var_name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        }),
    }
}
