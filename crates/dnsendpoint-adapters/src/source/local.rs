//! Manifest source backed by files and directories on disk.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use dnsendpoint_core::{
    application::{ApplicationError, Manifest, ports::ManifestSource},
    error::{CoreError, CoreResult},
};

use crate::manifest::parse_manifests;

/// Extensions picked up when walking a directory.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Reads manifests from files and directory trees.
///
/// A file root is always read. Directory roots are walked recursively in
/// file-name order and only files with a matching extension are read.
#[derive(Debug, Clone)]
pub struct LocalManifestSource {
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
    follow_links: bool,
}

impl LocalManifestSource {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
            follow_links: false,
        }
    }

    /// Replace the directory extension filter. Leading dots are ignored.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == e)
            })
    }

    /// Files to read under `root`, in walk order.
    fn files(&self, root: &Path) -> CoreResult<Vec<PathBuf>> {
        let metadata = std::fs::metadata(root).map_err(|e| unavailable(root, &e))?;
        if metadata.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                CoreError::from(ApplicationError::SourceUnavailable {
                    source_name: path.display().to_string(),
                    reason: format!("directory walk error: {e}"),
                })
            })?;

            if entry.file_type().is_file() && self.matches_extension(entry.path()) {
                files.push(entry.into_path());
            } else {
                trace!(path = %entry.path().display(), "Skipping");
            }
        }
        Ok(files)
    }
}

impl ManifestSource for LocalManifestSource {
    fn load(&self) -> CoreResult<Vec<Manifest>> {
        let mut manifests = Vec::new();
        for root in &self.roots {
            for file in self.files(root)? {
                let text = std::fs::read_to_string(&file).map_err(|e| unavailable(&file, &e))?;
                let parsed = parse_manifests(&file.display().to_string(), &text)?;
                debug!(path = %file.display(), resources = parsed.len(), "Read manifest file");
                manifests.extend(parsed);
            }
        }
        Ok(manifests)
    }

    fn describe(&self) -> String {
        self.roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn unavailable(path: &Path, e: &io::Error) -> CoreError {
    ApplicationError::SourceUnavailable {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    }
    .into()
}
