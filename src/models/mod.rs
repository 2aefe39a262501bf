pub mod extraction;
pub mod loaders;
pub mod paragraph;
pub mod script;

pub use extraction::{ConversionStatus, Extraction, ExtractionStats};
pub use loaders::{load_config, load_config_file, resolve_config_path};
pub use paragraph::{split_paragraphs, Paragraph, ParagraphSplit};
pub use script::{ConvertMode, ScriptVariant};
