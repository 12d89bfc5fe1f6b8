use crate::config::Config;
use crate::error::ExtractError;
use crate::extractor::ExtractorRegistry;
use crate::models::{BatchOutput, ExportMode, ExtractionResult, InputFile};
use crate::progress::{Progress, ProgressSink, Silent};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Sequential batch driver: one ExtractionResult per InputFile, in input order
pub struct Pipeline {
    registry: ExtractorRegistry,
}

impl Pipeline {
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Pipeline over the built-in extractors, limited as configured
    pub fn from_config(config: &Config) -> Self {
        Self::new(ExtractorRegistry::with_max_entry_bytes(
            config.limits.max_entry_bytes,
        ))
    }

    /// Extract a single file; failures end up in the result, never in a panic or error
    pub fn extract_one(&self, file: &InputFile) -> ExtractionResult {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.registry.extract(&file.name, &file.bytes)
        }))
        .unwrap_or_else(|payload| Err(ExtractError::Panicked(panic_message(payload.as_ref()))));

        match &outcome {
            Ok(text) => debug!(file = %file.name, chars = text.len(), "extracted"),
            Err(ExtractError::Unsupported { extension }) => {
                warn!(file = %file.name, extension = %extension, "unsupported file type")
            }
            Err(e) => warn!(file = %file.name, error = %e, "extraction failed"),
        }

        ExtractionResult::new(file.name.clone(), outcome)
    }

    /// Run a batch without progress reporting
    pub fn run(&self, files: &[InputFile], mode: ExportMode) -> BatchOutput {
        self.run_with(files, mode, &mut Silent)
    }

    /// Run a batch, notifying `sink` after each file completes
    pub fn run_with(
        &self,
        files: &[InputFile],
        mode: ExportMode,
        sink: &mut dyn ProgressSink,
    ) -> BatchOutput {
        let total = files.len();
        info!(files = total, mode = %mode, "starting batch");

        let mut records = Vec::with_capacity(total);
        for (index, file) in files.iter().enumerate() {
            let result = self.extract_one(file);
            sink.file_completed(&Progress {
                completed: index + 1,
                total,
                file_name: &file.name,
                succeeded: result.succeeded(),
            });
            records.push(result);
        }

        let output = BatchOutput::new(records, mode);
        info!(
            files = output.len(),
            failed = output.failed_count(),
            "batch complete"
        );
        output
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ExtractorRegistry::new())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
