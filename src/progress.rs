use indicatif::{ProgressBar, ProgressStyle};

/// Completion notice for one file of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress<'a> {
    /// Files finished so far, this one included
    pub completed: usize,
    pub total: usize,
    pub file_name: &'a str,
    pub succeeded: bool,
}

impl Progress<'_> {
    /// Share of the batch done, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Receiver of per-file completion updates
///
/// The pipeline works headless with `Silent`; closures taking a `&Progress`
/// are sinks too.
pub trait ProgressSink {
    fn file_completed(&mut self, progress: &Progress<'_>);
}

/// Sink that ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {
    fn file_completed(&mut self, _progress: &Progress<'_>) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(&Progress<'_>),
{
    fn file_completed(&mut self, progress: &Progress<'_>) {
        self(progress)
    }
}

/// Terminal progress bar
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files ({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// Reporter that tracks position without drawing anything
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

impl ProgressSink for BarReporter {
    fn file_completed(&mut self, progress: &Progress<'_>) {
        self.bar.set_position(progress.completed as u64);
        self.bar.set_message(progress.file_name.to_string());
    }
}
