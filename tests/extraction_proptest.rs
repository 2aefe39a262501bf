//! Property-based tests for paragraph extraction
//!
//! Inputs are assembled from plain CJK runs and bracketed annotations so the
//! expected output is known by construction.

use chinese_extractor::{ConverterCapability, ExtractOptions, NormalizeFlow, ParagraphExtractor};
use proptest::prelude::*;

fn flow() -> NormalizeFlow {
    NormalizeFlow::new(
        ParagraphExtractor::new(ExtractOptions::default()).unwrap(),
        ConverterCapability::Unavailable,
    )
}

/// Plain Chinese text with Chinese punctuation, no whitespace or brackets
fn plain_strategy() -> impl Strategy<Value = String> {
    "[\u{4e00}-\u{4e80}，。！？；：、“”《》]{0,6}"
}

/// A bracketed annotation, ASCII or full-width, optionally nested once
fn annotation_strategy() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z ,'\u{4e00}-\u{4e20}]{0,8}",
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(inner, full_width, nested)| {
            let (open, close) = if full_width { ('（', '）') } else { ('(', ')') };
            if nested {
                format!("{open}{inner}{open}{inner}{close}{close}")
            } else {
                format!("{open}{inner}{close}")
            }
        })
}

/// One line body: alternating plain runs and annotations, plus the expected output
fn body_strategy() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec((plain_strategy(), prop::option::of(annotation_strategy())), 1..5)
        .prop_map(|parts| {
            let mut raw = String::new();
            let mut expected = String::new();
            for (plain, annotation) in parts {
                raw.push_str(&plain);
                expected.push_str(&plain);
                if let Some(annotation) = annotation {
                    raw.push_str(&annotation);
                }
            }
            (raw, expected)
        })
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![".", "、", "．", " . ", "、 "])
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_balanced_brackets_and_ordinals_removed(
            lines in prop::collection::vec((body_strategy(), separator_strategy()), 0..6)
        ) {
            let mut raw = String::new();
            let mut expected = String::new();
            for (idx, ((body, want), sep)) in lines.iter().enumerate() {
                raw.push_str(&format!("{}{}{}\n", idx + 1, sep, body));
                expected.push_str(want);
            }

            let out = flow().extract_text(&raw);

            prop_assert_eq!(&out, &expected);
            prop_assert!(!out.contains(['(', ')', '（', '）']));
        }

        #[test]
        fn test_extraction_is_idempotent(text in "[\u{4e00}-\u{4e80}，。！a-z ]{0,24}") {
            let flow = flow();
            let once = flow.extract_text(&text);
            let twice = flow.extract_text(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_lines_without_ordinal_pass_through(body in "[\u{4e00}-\u{4e80}，。]{1,12}") {
            prop_assert_eq!(flow().extract_text(&body), body);
        }

        #[test]
        fn test_unbalanced_input_never_panics(text in "[\u{4e00}-\u{4e10}()（）0-9.、\n ]{0,40}") {
            let out = flow().extract_text(&text);
            prop_assert!(out.chars().count() <= text.chars().count());
        }
    }

    #[cfg(feature = "table")]
    proptest! {
        #[test]
        fn test_table_round_trip_for_one_to_one_chars(
            chars in prop::collection::vec(
                prop::sample::select("爱国学习时间东车门开关见觉体说话写读请让".chars().collect::<Vec<_>>()),
                0..16,
            )
        ) {
            use chinese_extractor::infrastructure::converters::TableConverter;
            use chinese_extractor::{ScriptConverter, ScriptVariant};

            let original: String = chars.into_iter().collect();
            let trad = TableConverter.convert(&original, ScriptVariant::Traditional);
            prop_assert_eq!(TableConverter.convert(&trad, ScriptVariant::Simplified), original);
        }
    }
}
