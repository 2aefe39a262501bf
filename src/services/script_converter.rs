//! 简繁转换服务 - 业务能力层
//!
//! 只描述"能把整段文本转成某种字形"这一能力，不关心具体由哪个组件实现

use crate::error::ConversionError;
use crate::models::script::ScriptVariant;

/// 简繁转换能力
pub trait ScriptConverter: std::fmt::Debug + Send + Sync {
    /// 后端名称（用于日志和结果报告）
    fn name(&self) -> &'static str;

    /// 把整段文本转换为目标字形，返回结果原样交给调用方
    fn convert(&self, text: &str, target: ScriptVariant) -> String;
}

/// 启动时解析出的转换能力
///
/// 解析只发生一次，之后作为不可变配置注入到提取流程中
#[derive(Debug)]
pub enum ConverterCapability {
    Available(Box<dyn ScriptConverter>),
    Unavailable,
}

impl ConverterCapability {
    pub fn backend_name(&self) -> Option<&'static str> {
        match self {
            ConverterCapability::Available(c) => Some(c.name()),
            ConverterCapability::Unavailable => None,
        }
    }

    /// 执行转换；没有可用后端时返回 `ConversionUnavailable`
    pub fn convert(&self, text: &str, target: ScriptVariant) -> Result<String, ConversionError> {
        match self {
            ConverterCapability::Available(converter) => Ok(converter.convert(text, target)),
            ConverterCapability::Unavailable => {
                Err(ConversionError::ConversionUnavailable { target })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Upper;

    impl ScriptConverter for Upper {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn convert(&self, text: &str, _target: ScriptVariant) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_available_capability_delegates() {
        let cap = ConverterCapability::Available(Box::new(Upper));
        assert_eq!(cap.backend_name(), Some("upper"));
        assert_eq!(cap.convert("ab", ScriptVariant::Simplified).unwrap(), "AB");
    }

    #[test]
    fn test_unavailable_capability_errors() {
        let cap = ConverterCapability::Unavailable;
        assert_eq!(
            cap.convert("ab", ScriptVariant::Traditional),
            Err(ConversionError::ConversionUnavailable {
                target: ScriptVariant::Traditional
            })
        );
    }
}
