use crate::config::ScanConfig;
use crate::extractor::Format;
use crate::models::InputFile;
use crate::utils;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Supplier of the ordered files a batch is built from
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Read every file this source covers, in batch order
    async fn load(&self) -> Result<Vec<InputFile>>;
}

/// Explicitly listed files, kept in the given order and named by file name
pub struct PathListSource {
    paths: Vec<PathBuf>,
}

impl PathListSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl InputSource for PathListSource {
    async fn load(&self) -> Result<Vec<InputFile>> {
        let mut files = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            files.push(read_input(path, name).await?);
        }
        Ok(files)
    }
}

/// Directory walk keeping files with a supported extension, sorted by name
pub struct DirectorySource {
    root: PathBuf,
    scan: ScanConfig,
}

impl DirectorySource {
    pub fn new(root: PathBuf, scan: ScanConfig) -> Self {
        Self { root, scan }
    }

    /// Paths of supported files under `root`, in walk order
    fn scan_paths(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
        let max_depth = if scan.recursive { usize::MAX } else { 1 };
        let include_hidden = scan.include_hidden;

        let walker = WalkDir::new(root)
            .follow_links(scan.follow_links)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || include_hidden
                    || !utils::is_hidden(&entry.file_name().to_string_lossy())
            });

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to scan directory: {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let extension = utils::get_extension(&entry.file_name().to_string_lossy());
            match extension {
                Some(ext) if Format::is_supported(&ext) => paths.push(entry.into_path()),
                _ => debug!(path = %entry.path().display(), "skipping unsupported file"),
            }
        }
        Ok(paths)
    }
}

#[async_trait]
impl InputSource for DirectorySource {
    async fn load(&self) -> Result<Vec<InputFile>> {
        let root = self.root.clone();
        let scan = self.scan.clone();
        let paths = tokio::task::spawn_blocking(move || Self::scan_paths(&root, &scan))
            .await
            .context("Directory scan task failed")??;

        debug!(root = %self.root.display(), files = paths.len(), "directory scanned");

        let mut files = Vec::with_capacity(paths.len());
        for path in &paths {
            let name = utils::relative_name(&self.root, path);
            files.push(read_input(path, name).await?);
        }
        Ok(files)
    }
}

async fn read_input(path: &Path, name: String) -> Result<InputFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(InputFile::new(name, bytes))
}

/// Pick the source for one command-line path: directories are scanned, anything else is read as a file
pub fn source_for(path: &Path, scan: &ScanConfig) -> Box<dyn InputSource> {
    if path.is_dir() {
        Box::new(DirectorySource::new(path.to_path_buf(), scan.clone()))
    } else {
        Box::new(PathListSource::new(vec![path.to_path_buf()]))
    }
}

/// Resolve command-line paths into one ordered batch, in argument order
pub async fn collect_inputs(paths: &[PathBuf], scan: &ScanConfig) -> Result<Vec<InputFile>> {
    let mut files = Vec::new();
    for path in paths {
        let source = source_for(path, scan);
        files.extend(source.load().await?);
    }
    Ok(files)
}
