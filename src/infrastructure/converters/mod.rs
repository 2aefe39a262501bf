//! 简繁转换后端与启动时的能力解析
//!
//! 后端是否"可用"由编译特性决定。解析按配置给出的优先顺序进行，
//! 第一个可用的后端生效，之后不再重复探测。

#[cfg(feature = "table")]
mod char_table;
#[cfg(feature = "table")]
mod table_backend;
#[cfg(feature = "zhconv")]
mod zhconv_backend;

#[cfg(feature = "table")]
pub use table_backend::TableConverter;
#[cfg(feature = "zhconv")]
pub use zhconv_backend::ZhconvConverter;

use crate::services::script_converter::{ConverterCapability, ScriptConverter};
use tracing::{debug, info, warn};

/// 已知的后端名称
pub const KNOWN_BACKENDS: &[&str] = &["zhconv", "table"];

/// 按名称构造后端；未编译进来的后端返回 `None`
fn instantiate(name: &str) -> Option<Box<dyn ScriptConverter>> {
    match name {
        #[cfg(feature = "zhconv")]
        "zhconv" => Some(Box::new(ZhconvConverter)),
        #[cfg(feature = "table")]
        "table" => Some(Box::new(TableConverter)),
        _ => None,
    }
}

/// 按优先顺序解析出第一个可用的转换后端
pub fn resolve_converter<S: AsRef<str>>(preferences: &[S]) -> ConverterCapability {
    for name in preferences {
        let name = name.as_ref().trim().to_ascii_lowercase();

        if !KNOWN_BACKENDS.contains(&name.as_str()) {
            warn!("未知的简繁转换后端: {}，已跳过", name);
            continue;
        }

        match instantiate(&name) {
            Some(converter) => {
                info!("✓ 简繁转换后端: {}", converter.name());
                return ConverterCapability::Available(converter);
            }
            None => debug!("简繁转换后端 {} 未编译，尝试下一个", name),
        }
    }

    warn!("⚠️ 没有可用的简繁转换后端，转换将返回原文");
    ConverterCapability::Unavailable
}
