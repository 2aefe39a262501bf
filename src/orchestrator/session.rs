//! 会话 - 编排层
//!
//! 对应图形界面窗口持有的全部状态：输入框、输出框、转换方向，
//! 以及"上传 / 提取并转换 / 导出 / 清空"四个动作。本身不做任何文本变换。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::extraction::{ConversionStatus, Extraction};
use crate::models::script::{ConvertMode, ScriptVariant};
use crate::services::text_exporter::TextExporter;
use crate::services::text_loader::load_text;
use crate::workflow::NormalizeFlow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 需要提示给用户的消息（不是错误）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// 未提取到有效内容
    EmptyResult,
    /// 没有可用的转换后端，结果未转换
    ConversionUnavailable { target: ScriptVariant },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::EmptyResult => write!(f, "未提取到有效中文内容，请检查输入格式。"),
            Notice::ConversionUnavailable { target } => {
                write!(f, "未安装简繁转换组件，结果未转换为{}。", target)
            }
        }
    }
}

/// 提取会话
#[derive(Debug)]
pub struct Session {
    flow: NormalizeFlow,
    exporter: TextExporter,
    mode: ConvertMode,
    input: String,
    output: String,
    last: Option<Extraction>,
}

impl Session {
    pub fn new(flow: NormalizeFlow, exporter: TextExporter, mode: ConvertMode) -> Self {
        Self {
            flow,
            exporter,
            mode,
            input: String::new(),
            output: String::new(),
            last: None,
        }
    }

    /// 按配置创建会话
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            NormalizeFlow::from_config(config)?,
            TextExporter::with_default_name(config.default_export_name.clone()),
            config.convert_mode,
        ))
    }

    pub fn flow(&self) -> &NormalizeFlow {
        &self.flow
    }

    pub fn mode(&self) -> ConvertMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ConvertMode) {
        self.mode = mode;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// 最近一次提取的完整结果
    pub fn last_extraction(&self) -> Option<&Extraction> {
        self.last.as_ref()
    }

    /// 上传 TXT：用文件内容替换输入
    ///
    /// 读取失败时输入保持不变
    pub fn load_txt(&mut self, path: &Path) -> AppResult<()> {
        let content = load_text(path)?;
        info!("📁 已载入: {}", path.display());
        self.input = content;
        Ok(())
    }

    /// 提取并转换：用结果替换输出
    pub fn extract(&mut self) -> Vec<Notice> {
        let extraction = self.flow.run(&self.input, self.mode.target());
        let mut notices = Vec::new();

        if let ConversionStatus::Unavailable { target } = extraction.conversion {
            notices.push(Notice::ConversionUnavailable { target });
        }
        if extraction.is_empty() {
            notices.push(Notice::EmptyResult);
        }
        for notice in &notices {
            warn!("⚠️ {}", notice);
        }

        self.output = extraction.text.clone();
        self.last = Some(extraction);
        notices
    }

    /// 导出 TXT
    ///
    /// 失败时内存中的输入和输出都不受影响，可以重试
    pub fn save_txt(&self, path: &Path) -> AppResult<PathBuf> {
        self.exporter.write_text(path, &self.output)
    }

    /// 清空输入和输出
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.last = None;
    }
}
