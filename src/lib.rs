mod classify;
mod constants;
mod container;
mod convert;
mod describe;
mod extract;
mod markdown;
mod options;
mod parse_rels;
mod parse_xml;
mod records;
mod slide;
mod types;

pub use classify::{classify_shape, ShapeClass};
pub use container::PptxContainer;
pub use convert::pptx_to_yaml;
pub use describe::{ImageDescriber, OpenAiDescriber, ServiceError};
pub use extract::{extract_slide, PLACEHOLDER_DESCRIPTION};
pub use markdown::table_to_markdown;
pub use options::{ClassifyOrder, ConvertOptions, ConvertOptionsBuilder, ImageErrorPolicy};
pub use records::{DeckRecord, ImageRecord, SlideRecord, TableRecord};
pub use slide::Slide;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed slide: {0}")]
    Malformed(&'static str),

    #[error("Image data not found for relationship {0}")]
    ImageNotFound(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type Result<T> = std::result::Result<T, Error>;
