pub mod paragraph_extractor;
pub mod script_converter;
pub mod text_exporter;
pub mod text_loader;

pub use paragraph_extractor::{remove_bracketed, ExtractOptions, ParagraphExtractor};
pub use script_converter::{ConverterCapability, ScriptConverter};
pub use text_exporter::TextExporter;
pub use text_loader::load_text;
