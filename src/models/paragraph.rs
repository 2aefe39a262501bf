use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 段落切分方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ParagraphSplit {
    /// 每个非空行是一个段落
    #[default]
    Line,
    /// 以空行分隔的文本块是一个段落
    BlankLine,
}

impl FromStr for ParagraphSplit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "newline" => Ok(ParagraphSplit::Line),
            "blank" | "blank_line" | "blank-line" => Ok(ParagraphSplit::BlankLine),
            other => Err(ConfigError::InvalidValue {
                key: "paragraph_split".to_string(),
                value: other.to_string(),
                expected: "line / blank_line".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ParagraphSplit {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 单个段落：可选的序号 + 正文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// 行首序号（仅用于日志，提取后丢弃）
    pub ordinal: Option<String>,
    /// 去掉序号后的正文
    pub body: String,
}

impl Paragraph {
    pub fn new(ordinal: Option<String>, body: impl Into<String>) -> Self {
        Self {
            ordinal,
            body: body.into(),
        }
    }
}

/// 将原始文本切分为段落单元
///
/// 每行先去掉首尾空白；`Line` 模式跳过空行，
/// `BlankLine` 模式把连续非空行直接拼接成一个段落。
pub fn split_paragraphs(raw: &str, mode: ParagraphSplit) -> Vec<String> {
    let lines = raw.lines().map(str::trim);

    match mode {
        ParagraphSplit::Line => lines.filter(|l| !l.is_empty()).map(String::from).collect(),
        ParagraphSplit::BlankLine => {
            let mut blocks = Vec::new();
            let mut current = String::new();
            for line in lines {
                if line.is_empty() {
                    if !current.is_empty() {
                        blocks.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push_str(line);
                }
            }
            if !current.is_empty() {
                blocks.push(current);
            }
            blocks
        }
    }
}
