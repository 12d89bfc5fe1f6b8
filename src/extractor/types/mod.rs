pub mod csv;
pub mod docx;
pub mod pdf;
pub mod pptx;
pub mod txt;
pub mod xlsx;

pub use csv::CsvExtractor;
pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use pptx::PptxExtractor;
pub use txt::TxtExtractor;
pub use xlsx::XlsxExtractor;
