//! 提取流程 - 流程层
//!
//! 定义"一份文本"的完整处理流程：切分 → 去序号/括号 → 拼接 → 简繁转换

use crate::config::Config;
use crate::error::{AppResult, ConversionError};
use crate::infrastructure::resolve_converter;
use crate::models::extraction::{ConversionStatus, Extraction};
use crate::models::script::ScriptVariant;
use crate::services::paragraph_extractor::{ExtractOptions, ParagraphExtractor};
use crate::services::script_converter::ConverterCapability;
use tracing::{debug, warn};

/// 提取流程
///
/// 持有启动时解析好的转换能力，本身无状态，每次调用互不影响
#[derive(Debug)]
pub struct NormalizeFlow {
    extractor: ParagraphExtractor,
    converter: ConverterCapability,
}

impl NormalizeFlow {
    /// 创建新的提取流程
    pub fn new(extractor: ParagraphExtractor, converter: ConverterCapability) -> Self {
        Self {
            extractor,
            converter,
        }
    }

    /// 按配置创建：编译正则并解析转换后端
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let extractor = ParagraphExtractor::new(ExtractOptions {
            split: config.paragraph_split,
            strict_charset: config.strict_charset,
        })?;
        let converter = resolve_converter(config.converter_backends.as_slice());
        Ok(Self::new(extractor, converter))
    }

    pub fn converter(&self) -> &ConverterCapability {
        &self.converter
    }

    pub fn extractor(&self) -> &ParagraphExtractor {
        &self.extractor
    }

    /// 只提取不转换
    pub fn extract_text(&self, raw: &str) -> String {
        let (paragraphs, _) = self.extractor.extract(raw);
        paragraphs.into_iter().map(|p| p.body).collect()
    }

    /// 执行完整流程
    ///
    /// 没有可用后端时返回未转换的文本，并在 `conversion` 中标记为降级
    pub fn run(&self, raw: &str, target: Option<ScriptVariant>) -> Extraction {
        let (paragraphs, stats) = self.extractor.extract(raw);
        let joined: String = paragraphs.into_iter().map(|p| p.body).collect();

        let (text, conversion) = match target {
            Some(target) if !joined.is_empty() => match self.converter.convert(&joined, target) {
                Ok(converted) => {
                    debug!("已转换为{}", target);
                    let backend = self.converter.backend_name().unwrap_or_default();
                    (converted, ConversionStatus::Converted { backend, target })
                }
                Err(ConversionError::ConversionUnavailable { target }) => {
                    warn!("⚠️ 没有可用的简繁转换组件，返回未转换文本");
                    (joined, ConversionStatus::Unavailable { target })
                }
            },
            _ => (joined, ConversionStatus::NotRequested),
        };

        Extraction {
            text,
            conversion,
            stats,
        }
    }
}
