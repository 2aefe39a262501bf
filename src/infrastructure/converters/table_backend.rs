use super::char_table::{SIMPLIFIED_TO_TRADITIONAL, TRADITIONAL_TO_SIMPLIFIED};
use crate::models::script::ScriptVariant;
use crate::services::script_converter::ScriptConverter;

/// 逐字查表的简繁转换
///
/// 只覆盖常用字，表外字符原样保留；不做词语级转换
#[derive(Debug, Default, Clone, Copy)]
pub struct TableConverter;

impl TableConverter {
    pub const NAME: &'static str = "table";
}

impl ScriptConverter for TableConverter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn convert(&self, text: &str, target: ScriptVariant) -> String {
        let table = match target {
            ScriptVariant::Simplified => &TRADITIONAL_TO_SIMPLIFIED,
            ScriptVariant::Traditional => &SIMPLIFIED_TO_TRADITIONAL,
        };
        text.chars()
            .map(|c| table.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_converts_both_directions() {
        assert_eq!(
            TableConverter.convert("今天天气很好", ScriptVariant::Traditional),
            "今天天氣很好"
        );
        assert_eq!(
            TableConverter.convert("繁體中文", ScriptVariant::Simplified),
            "繁体中文"
        );
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        let text = "AI 2024，《》";
        assert_eq!(TableConverter.convert(text, ScriptVariant::Traditional), text);
        assert_eq!(TableConverter.convert(text, ScriptVariant::Simplified), text);
    }

    #[test]
    fn test_one_to_one_entries_round_trip() {
        for (simp, trad) in SIMPLIFIED_TO_TRADITIONAL.entries() {
            assert_eq!(TRADITIONAL_TO_SIMPLIFIED.get(trad), Some(simp));
        }
    }

    #[test]
    fn test_many_to_one_only_towards_simplified() {
        assert_eq!(TableConverter.convert("頭髮", ScriptVariant::Simplified), "头发");
        assert_eq!(TableConverter.convert("头发", ScriptVariant::Traditional), "頭發");
    }
}
