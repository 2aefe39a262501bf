use crate::models::script::ScriptVariant;
use serde::Serialize;

/// 单次提取的统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// 切分出的段落数
    pub paragraphs: usize,
    /// 产生非空正文的段落数
    pub kept: usize,
    /// 去掉的序号数
    pub ordinals_stripped: usize,
    /// 删除的括号片段数
    pub brackets_removed: usize,
    /// 跳过的纯括号说明行
    pub annotation_lines: usize,
}

/// 简繁转换的执行情况
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionStatus {
    /// 未要求转换
    NotRequested,
    /// 已由某个后端完成转换
    Converted {
        backend: &'static str,
        target: ScriptVariant,
    },
    /// 没有可用的转换后端，返回未转换文本
    Unavailable { target: ScriptVariant },
}

impl ConversionStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ConversionStatus::Unavailable { .. })
    }
}

/// 提取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub text: String,
    pub conversion: ConversionStatus,
    pub stats: ExtractionStats,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
