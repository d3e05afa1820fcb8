//! Template writer
//!
//! Renders templates and hands them to a [`FileSink`]. Every write replaces
//! whatever was at the target path.

use std::path::{Path, PathBuf};

use crate::config::paths::ScaffoldPaths;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::storage::file_io::write_text_atomic;

use super::layout::render_layout;
use super::page::render_page;

/// Destination for rendered files
pub trait FileSink {
    /// Write `contents` to `path`, replacing any existing file
    fn write_file(&self, path: &Path, contents: &str) -> ScaffoldResult<()>;
}

/// Writes to disk with temp-file + rename
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicFileSink;

impl FileSink for AtomicFileSink {
    fn write_file(&self, path: &Path, contents: &str) -> ScaffoldResult<()> {
        write_text_atomic(path, contents)
    }
}

impl<S: FileSink + ?Sized> FileSink for &S {
    fn write_file(&self, path: &Path, contents: &str) -> ScaffoldResult<()> {
        (**self).write_file(path, contents)
    }
}

/// A file the writer produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Confirmation line, e.g. `Updated Search.tsx`
    pub message: String,
}

/// Writes the layout and page components under a project root
pub struct TemplateWriter<S: FileSink = AtomicFileSink> {
    paths: ScaffoldPaths,
    sink: S,
}

impl TemplateWriter<AtomicFileSink> {
    pub fn new(paths: ScaffoldPaths) -> Self {
        Self::with_sink(paths, AtomicFileSink)
    }
}

impl<S: FileSink> TemplateWriter<S> {
    /// Create a writer that sends output through `sink`
    pub fn with_sink(paths: ScaffoldPaths, sink: S) -> Self {
        Self { paths, sink }
    }

    /// Write `src/components/SharedLayout.tsx`
    pub fn write_layout(&self) -> ScaffoldResult<WrittenFile> {
        let path = self.paths.layout_file();
        self.write(&path, render_layout())?;

        Ok(WrittenFile {
            message: format!("Created {}", file_name(&path)),
            path,
        })
    }

    /// Write `src/pages/<page_name>.tsx`
    pub fn write_page(&self, page_name: &str) -> ScaffoldResult<WrittenFile> {
        let path = self.paths.page_file(page_name);
        self.write(&path, &render_page(page_name))?;

        Ok(WrittenFile {
            message: format!("Updated {}", file_name(&path)),
            path,
        })
    }

    fn write(&self, path: &Path, contents: &str) -> ScaffoldResult<()> {
        self.sink.write_file(path, contents).map_err(|e| {
            ScaffoldError::Template(format!("Failed to write {}: {}", file_name(path), e))
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
