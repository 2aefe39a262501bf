//! # Chinese Extractor
//!
//! 提取带序号段落中的中文文本，去除括号注释并拼接，可选简繁转换后导出为 TXT
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有具体的简繁转换组件
//! - `resolve_converter` - 启动时按优先顺序解析出唯一的转换能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `ParagraphExtractor` - 去序号、去括号
//! - `ScriptConverter` - 简繁转换能力
//! - `TextExporter` / `load_text` - 写 / 读 TXT
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `NormalizeFlow`：切分 → 提取 → 拼接 → 转换
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/session` - 输入 / 输出缓冲与用户动作
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::resolve_converter;
pub use models::{ConversionStatus, ConvertMode, Extraction, ParagraphSplit, ScriptVariant};
pub use orchestrator::{Notice, Session};
pub use services::{ConverterCapability, ExtractOptions, ParagraphExtractor, ScriptConverter};
pub use utils::logging;
pub use workflow::NormalizeFlow;
