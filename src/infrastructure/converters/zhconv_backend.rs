use crate::models::script::ScriptVariant;
use crate::services::script_converter::ScriptConverter;
use zhconv::Variant;

/// 基于 zhconv 的完整简繁转换（OpenCC / MediaWiki 词表）
#[derive(Debug, Default, Clone, Copy)]
pub struct ZhconvConverter;

impl ZhconvConverter {
    pub const NAME: &'static str = "zhconv";
}

impl ScriptConverter for ZhconvConverter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn convert(&self, text: &str, target: ScriptVariant) -> String {
        let variant = match target {
            ScriptVariant::Simplified => Variant::ZhHans,
            ScriptVariant::Traditional => Variant::ZhHant,
        };
        zhconv::zhconv(text, variant)
    }
}
