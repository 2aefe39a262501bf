use chinese_extractor::config::Config;
use chinese_extractor::{
    resolve_converter, ConversionStatus, ConvertMode, Notice, ParagraphSplit, ScriptVariant,
    Session,
};
use std::fs;
use std::process::Command;

fn config_with(backends: &[&str], mode: ConvertMode) -> Config {
    Config {
        convert_mode: mode,
        converter_backends: backends.iter().map(|s| s.to_string()).collect(),
        ..Config::default()
    }
}

#[test]
fn test_full_session_without_conversion() {
    let mut session = Session::from_config(&config_with(&[], ConvertMode::None)).unwrap();
    session.set_input(
        "1.今天天气很好(It's a good day)。\n\n(camera, slow pan)\n2、他说（小声）你好！\n没有序号。\n",
    );

    assert!(session.extract().is_empty());
    assert_eq!(session.output(), "今天天气很好。他说你好！没有序号。");

    let stats = &session.last_extraction().unwrap().stats;
    assert_eq!(stats.paragraphs, 4);
    assert_eq!(stats.annotation_lines, 1);
    assert_eq!(stats.ordinals_stripped, 2);
}

#[test]
fn test_blank_line_mode_joins_blocks() {
    let config = Config {
        paragraph_split: ParagraphSplit::BlankLine,
        ..config_with(&[], ConvertMode::None)
    };
    let mut session = Session::from_config(&config).unwrap();
    session.set_input("1.第一段\n2.不是新段落。\n\n3.第二段。");
    session.extract();
    assert_eq!(session.output(), "第一段2.不是新段落。第二段。");
}

#[test]
fn test_missing_backends_degrade_gracefully() {
    let mut session =
        Session::from_config(&config_with(&["hanziconv"], ConvertMode::T2S)).unwrap();
    session.set_input("1.繁體中文。");
    assert_eq!(
        session.extract(),
        vec![Notice::ConversionUnavailable {
            target: ScriptVariant::Simplified
        }]
    );
    assert_eq!(session.output(), "繁體中文。");
}

#[cfg(feature = "table")]
#[test]
fn test_table_backend_round_trip() {
    let mut session = Session::from_config(&config_with(&["table"], ConvertMode::S2T)).unwrap();
    session.set_input("1.我们学习汉语。\n2.东边的门开了(door)。");
    session.extract();
    let traditional = session.output().to_string();
    assert_eq!(traditional, "我們學習漢語。東邊的門開了。");

    session.set_mode(ConvertMode::T2S);
    session.set_input(traditional);
    session.extract();
    assert_eq!(session.output(), "我们学习汉语。东边的门开了。");
}

#[cfg(feature = "zhconv")]
#[test]
fn test_default_backend_converts() {
    let mut session = Session::from_config(&config_with(&["zhconv"], ConvertMode::S2T)).unwrap();
    session.set_input("1.今天天气很好(It's a good day)。");
    session.extract();
    assert_eq!(session.output(), "今天天氣很好。");
    assert!(matches!(
        session.last_extraction().unwrap().conversion,
        ConversionStatus::Converted {
            backend: "zhconv",
            target: ScriptVariant::Traditional
        }
    ));
}

#[test]
fn test_resolution_happens_once_per_session() {
    let session = Session::from_config(&config_with(&[], ConvertMode::S2T)).unwrap();
    assert_eq!(session.flow().converter().backend_name(), None);
    let none: [&str; 0] = [];
    assert_eq!(resolve_converter(&none).backend_name(), None);
}

#[test]
fn test_load_extract_export_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("原文.txt");
    fs::write(&input, "1.你好。\n2.世界。\n").unwrap();

    let mut session = Session::from_config(&config_with(&[], ConvertMode::None)).unwrap();
    session.load_txt(&input).unwrap();
    session.extract();
    let written = session.save_txt(&dir.path().join("结果")).unwrap();

    assert_eq!(written, dir.path().join("结果.txt"));
    assert_eq!(fs::read_to_string(written).unwrap(), "你好。世界。");
}

#[test]
fn test_cli_exports_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "1.你好(hello)。\n2.世界。\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_chinese_extractor"))
        .current_dir(dir.path())
        .env_remove("CONVERT_MODE")
        .env_remove("CONVERTER_BACKENDS")
        .env_remove("EXTRACT_LOG_FILE")
        .arg(&input)
        .args(["--mode", "none", "-o"])
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "你好。世界。");
}

#[test]
fn test_cli_json_report_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "1.你好。").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_chinese_extractor"))
        .current_dir(dir.path())
        .env_remove("CONVERT_MODE")
        .env_remove("CONVERTER_BACKENDS")
        .env_remove("EXTRACT_LOG_FILE")
        .arg(&input)
        .args(["--mode", "none", "--json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["text"], "你好。");
    assert_eq!(report["conversion"]["status"], "not_requested");
    assert_eq!(report["stats"]["kept"], 1);
}

#[test]
fn test_cli_config_file_aliases_and_log() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let config = dir.path().join("extract.toml");
    fs::write(&input, "1.你好。\n\n2.世界。\n").unwrap();
    fs::write(&config, "convert_mode = \"off\"\nparagraph_split = \"blank\"\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_chinese_extractor"))
        .current_dir(dir.path())
        .env_remove("CONVERT_MODE")
        .env_remove("PARAGRAPH_SPLIT")
        .env_remove("CONVERTER_BACKENDS")
        .env_remove("EXTRACT_LOG_FILE")
        .env_remove("RUST_LOG")
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "你好。世界。");
    assert!(String::from_utf8_lossy(&out.stderr).contains("已加载配置"));
}
