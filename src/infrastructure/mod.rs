//! 基础设施层
//!
//! 持有具体的简繁转换组件，只向上暴露 `ConverterCapability`

pub mod converters;

pub use converters::resolve_converter;
