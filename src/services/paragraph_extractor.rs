//! 段落提取服务 - 业务能力层
//!
//! 只负责"把一份原始文本拆成去掉序号和括号内容的段落"，
//! 不拼接、不做简繁转换

use crate::error::AppResult;
use crate::models::extraction::ExtractionStats;
use crate::models::paragraph::{split_paragraphs, Paragraph, ParagraphSplit};
use crate::utils::logging::truncate_text;
use regex::Regex;
use tracing::{debug, trace};

/// 行首序号：数字 + `.` / `．` / `、`
const ORDINAL_PATTERN: &str = r"^\s*(\d+)\s*[\.．、]\s*";
/// 整行只有一段不含汉字的英文括号说明，例如 `(camera, close-up)`
const ANNOTATION_LINE_PATTERN: &str = r"^\([^()\u{4e00}-\u{9fff}]*\)$";
/// 严格模式下保留的字符
const STRICT_CHARSET_PATTERN: &str =
    r"[\u{4e00}-\u{9fff}A-Za-z0-9，。！？；：、“”‘’《》【】（）—…·\s]+";

/// 提取选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub split: ParagraphSplit,
    pub strict_charset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketKind {
    Ascii,
    FullWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketSide {
    Open,
    Close,
}

fn bracket_of(c: char) -> Option<(BracketKind, BracketSide)> {
    match c {
        '(' => Some((BracketKind::Ascii, BracketSide::Open)),
        ')' => Some((BracketKind::Ascii, BracketSide::Close)),
        '（' => Some((BracketKind::FullWidth, BracketSide::Open)),
        '）' => Some((BracketKind::FullWidth, BracketSide::Close)),
        _ => None,
    }
}

/// 删除所有配对的括号片段，返回结果和删除的片段数
///
/// 右括号与最近一个同类未闭合左括号配对，整段删除（嵌套的内层随外层一起删掉）。
/// 半角与全角括号互不配对；落单的括号原样保留。
pub fn remove_bracketed(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    // 未闭合的左括号及其在 out 中的字节位置
    let mut open: Vec<(BracketKind, usize)> = Vec::new();
    let mut removed = 0;

    for c in text.chars() {
        match bracket_of(c) {
            Some((kind, BracketSide::Open)) => {
                open.push((kind, out.len()));
                out.push(c);
            }
            Some((kind, BracketSide::Close)) => {
                match open.iter().rposition(|(k, _)| *k == kind) {
                    Some(idx) => {
                        out.truncate(open[idx].1);
                        open.truncate(idx);
                        removed += 1;
                    }
                    None => out.push(c),
                }
            }
            None => out.push(c),
        }
    }

    (out, removed)
}

/// 段落提取服务
#[derive(Debug, Clone)]
pub struct ParagraphExtractor {
    options: ExtractOptions,
    ordinal_re: Regex,
    annotation_re: Regex,
    charset_re: Regex,
}

impl ParagraphExtractor {
    /// 创建新的段落提取服务
    pub fn new(options: ExtractOptions) -> AppResult<Self> {
        Ok(Self {
            options,
            ordinal_re: Regex::new(ORDINAL_PATTERN)?,
            annotation_re: Regex::new(ANNOTATION_LINE_PATTERN)?,
            charset_re: Regex::new(STRICT_CHARSET_PATTERN)?,
        })
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// 去掉行首序号
    ///
    /// 没有序号时原样返回，序号为 `None`
    pub fn strip_ordinal<'a>(&self, text: &'a str) -> (Option<String>, &'a str) {
        match self.ordinal_re.captures(text) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                let digits = caps.get(1).map(|m| m.as_str().to_string());
                (digits, &text[whole..])
            }
            None => (None, text),
        }
    }

    /// 处理单个段落单元
    ///
    /// 纯括号说明行返回 `None`；其余段落即使正文为空也返回
    fn extract_unit(&self, unit: &str, stats: &mut ExtractionStats) -> Option<Paragraph> {
        if self.annotation_re.is_match(unit) {
            trace!("跳过说明行: {}", truncate_text(unit, 40));
            stats.annotation_lines += 1;
            return None;
        }

        let (ordinal, rest) = self.strip_ordinal(unit);
        if ordinal.is_some() {
            stats.ordinals_stripped += 1;
        }

        let (without_brackets, removed) = remove_bracketed(rest);
        stats.brackets_removed += removed;

        let body = if self.options.strict_charset {
            self.charset_re
                .find_iter(&without_brackets)
                .map(|m| m.as_str())
                .collect::<String>()
                .trim()
                .to_string()
        } else {
            without_brackets.trim().to_string()
        };

        Some(Paragraph::new(ordinal, body))
    }

    /// 从原始文本中提取所有段落（保持原有顺序，丢弃空正文）
    pub fn extract(&self, raw: &str) -> (Vec<Paragraph>, ExtractionStats) {
        let mut stats = ExtractionStats::default();
        let mut paragraphs = Vec::new();

        for unit in split_paragraphs(raw, self.options.split) {
            stats.paragraphs += 1;

            let Some(paragraph) = self.extract_unit(&unit, &mut stats) else {
                continue;
            };

            debug!(
                "段落 {}: 序号 {:?} → {}",
                stats.paragraphs,
                paragraph.ordinal,
                truncate_text(&paragraph.body, 40)
            );

            if !paragraph.body.is_empty() {
                stats.kept += 1;
                paragraphs.push(paragraph);
            }
        }

        (paragraphs, stats)
    }
}
