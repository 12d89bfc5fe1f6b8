pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod source;
pub mod utils;

pub use config::Config;
pub use error::{ExtractError, OutputError};
pub use extractor::{detect_format, ExtractorRegistry, Format, TextExtractor};
pub use models::{BatchOutput, ExportMode, ExtractionResult, InputFile};
pub use pipeline::Pipeline;
pub use progress::{Progress, ProgressSink};
pub use source::InputSource;
