use anyhow::{Context, Result};
use chinese_extractor::models::loaders::{load_config, resolve_config_path};
use chinese_extractor::services::text_loader::decode_lossy;
use chinese_extractor::{logging, ConvertMode, Extraction, ParagraphSplit, Session};
use clap::Parser;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 提取序号后的中文并导出 TXT，可选简繁转换
#[derive(Parser, Debug)]
#[command(name = "chinese_extractor", version)]
struct Cli {
    /// 输入 TXT 文件，缺省时从标准输入读取
    input: Option<PathBuf>,

    /// 导出路径（无扩展名时补 .txt，目录则使用默认文件名）；缺省时输出到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 转换方向: t2s / s2t / none
    #[arg(short, long)]
    mode: Option<ConvertMode>,

    /// 段落切分: line / blank_line
    #[arg(long)]
    split: Option<ParagraphSplit>,

    /// 只保留中文、英文数字和中文标点
    #[arg(long)]
    strict_charset: bool,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 以 JSON 输出结果和统计
    #[arg(long)]
    json: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

/// JSON 输出格式
#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    output_path: Option<String>,
    notices: Vec<String>,
    #[serde(flatten)]
    extraction: &'a Extraction,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：文件 → 环境变量 → 命令行
    let config_path = resolve_config_path(cli.config.as_deref());
    let mut config = load_config(config_path.as_deref())?
        .apply_env(|name| std::env::var(name).ok())
        .context("环境变量配置无效")?;
    if let Some(mode) = cli.mode {
        config.convert_mode = mode;
    }
    if let Some(split) = cli.split {
        config.paragraph_split = split;
    }
    config.strict_charset |= cli.strict_charset;
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);
    if let Some(log_file) = &config.log_file {
        logging::init_log_file(log_file)?;
    }
    match &config_path {
        Some(path) => info!("已加载配置: {}", path.display()),
        None => debug!("未找到配置文件，使用默认配置"),
    }

    let mut session = Session::from_config(&config)?;
    logging::log_startup(
        session.mode().label(),
        session.flow().converter().backend_name(),
    );

    let source = match &cli.input {
        Some(path) => {
            session.load_txt(path)?;
            path.display().to_string()
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("无法读取标准输入")?;
            session.set_input(decode_lossy(&bytes));
            "stdin".to_string()
        }
    };

    let notices = session.extract();
    let extraction = session
        .last_extraction()
        .context("提取结果缺失")?;
    logging::log_run_summary(extraction);

    if let Some(log_file) = &config.log_file {
        logging::append_run_record(log_file, &source, extraction)?;
    }

    let output_path = match &cli.output {
        Some(_) if session.output().is_empty() => {
            warn!("⚠️ 没有可导出的内容，跳过导出");
            None
        }
        Some(path) => Some(session.save_txt(path)?),
        None => None,
    };

    if cli.json {
        let report = Report {
            source: &source,
            output_path: output_path.as_ref().map(|p| p.display().to_string()),
            notices: notices.iter().map(ToString::to_string).collect(),
            extraction,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.output.is_none() {
        println!("{}", session.output());
    }

    Ok(())
}
