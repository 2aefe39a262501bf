//! 简繁字形相关的值类型

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 字形变体（转换目标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptVariant {
    /// 简体
    Simplified,
    /// 繁体
    Traditional,
}

impl ScriptVariant {
    /// 获取中文名称
    pub fn name(self) -> &'static str {
        match self {
            ScriptVariant::Simplified => "简体",
            ScriptVariant::Traditional => "繁体",
        }
    }

}

impl std::fmt::Display for ScriptVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 转换方向
///
/// `t2s` 繁转简、`s2t` 简转繁、`none` 不转换
///
/// 配置文件与命令行、环境变量共用 `FromStr`，接受相同的别名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConvertMode {
    #[default]
    #[serde(rename = "t2s")]
    T2S,
    #[serde(rename = "s2t")]
    S2T,
    #[serde(rename = "none")]
    None,
}

impl ConvertMode {
    /// 转换目标，`None` 表示不转换
    pub fn target(self) -> Option<ScriptVariant> {
        match self {
            ConvertMode::T2S => Some(ScriptVariant::Simplified),
            ConvertMode::S2T => Some(ScriptVariant::Traditional),
            ConvertMode::None => None,
        }
    }

    /// 界面上显示的方向标签
    pub fn label(self) -> &'static str {
        match self {
            ConvertMode::T2S => "繁体→简体",
            ConvertMode::S2T => "简体→繁体",
            ConvertMode::None => "不转换",
        }
    }
}

impl FromStr for ConvertMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t2s" | "simplified" | "hans" | "简体" => Ok(ConvertMode::T2S),
            "s2t" | "traditional" | "hant" | "繁体" => Ok(ConvertMode::S2T),
            "none" | "off" | "" => Ok(ConvertMode::None),
            other => Err(ConfigError::InvalidValue {
                key: "convert_mode".to_string(),
                value: other.to_string(),
                expected: "t2s / s2t / none".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ConvertMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for ConvertMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ConvertMode::T2S => "t2s",
            ConvertMode::S2T => "s2t",
            ConvertMode::None => "none",
        };
        write!(f, "{}", code)
    }
}
