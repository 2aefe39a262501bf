//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 持有一次使用过程中的全部界面状态，把用户动作翻译成对下层的调用。
//!
//! ## 层次关系
//!
//! ```text
//! session (输入 / 输出缓冲 + 四个动作)
//!     ↓
//! workflow::NormalizeFlow (处理一份文本)
//!     ↓
//! services (能力层：提取 / 转换 / 读取 / 导出)
//!     ↓
//! infrastructure (基础设施：具体的简繁转换后端)
//! ```
//!
//! 编排层不做任何文本变换，只做调度和提示。

pub mod session;

pub use session::{Notice, Session};
