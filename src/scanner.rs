//! Project scanner
//!
//! Walks one directory level at a time looking for project files with the
//! configured suffix and classifies each match by its `TEMPLATE` line.
//! Recursion into containers happens only when the tree presenter asks to
//! expand a node, so a scan never touches more of the workspace than the
//! host is currently looking at.

use crate::config::WorkspaceConfig;
use crate::fs::FileSystem;
use crate::notify::{HostNotification, NoOpNotifier, Notifier};
use crate::project::{ProjectDescriptor, Template};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Scans directories for project files and builds descriptors
///
/// `scan(None)` is the root sentinel: it inspects the workspace root itself.
/// `scan(Some(dir))` enumerates the direct child directories of `dir`.
pub struct ProjectScanner<F: FileSystem> {
    config: WorkspaceConfig,
    fs: F,
    notifier: Arc<dyn Notifier>,
    template_re: Regex,
    suffix_pattern: String,
}

impl<F: FileSystem> ProjectScanner<F> {
    pub fn new(config: WorkspaceConfig, fs: F) -> Self {
        let suffix_pattern = config.suffix_pattern();
        Self {
            config,
            fs,
            notifier: Arc::new(NoOpNotifier),
            template_re: Regex::new(r"TEMPLATE\s*=\s*(\w+)").expect("valid regex"),
            suffix_pattern,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Scan for immediate child descriptors
    ///
    /// Failures never propagate out of a scan: unreadable directories and
    /// files are skipped with a warning so one bad entry cannot take down
    /// the presenter.
    pub fn scan(&self, dir: Option<&Path>) -> Vec<ProjectDescriptor> {
        match dir {
            Some(dir) => self.scan_children(dir),
            None => self.scan_root(),
        }
    }

    /// Root sentinel: the workspace root is itself a project node, not a
    /// container to recurse into, so the result has at most one entry.
    fn scan_root(&self) -> Vec<ProjectDescriptor> {
        let root = match &self.config.workspace_root {
            Some(root) => root.clone(),
            None => {
                debug!("No workspace open, returning empty tree");
                return Vec::new();
            }
        };

        if !self.has_project_file(&root) {
            self.notifier.notify(&HostNotification::WorkspaceNotRecognized {
                root: root.display().to_string(),
            });
            return Vec::new();
        }

        self.descriptor_for_dir(&root).into_iter().collect()
    }

    /// Enumerate direct child directories of `dir`; each one containing a
    /// project file yields a descriptor, the rest are skipped.
    fn scan_children(&self, dir: &Path) -> Vec<ProjectDescriptor> {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "Failed to read directory, skipping");
                return Vec::new();
            }
        };

        let mut projects = Vec::new();
        for entry in entries {
            if !entry.is_dir() {
                continue;
            }
            if let Some(descriptor) = self.descriptor_for_dir(entry.path()) {
                debug!(
                    project = %descriptor.name,
                    template = %descriptor.template,
                    "Discovered project"
                );
                projects.push(descriptor);
            }
        }

        projects
    }

    fn has_project_file(&self, dir: &Path) -> bool {
        self.find_project_file(dir).is_some()
    }

    /// First project file in `dir`, in directory-listing order
    ///
    /// When several suffix files share a directory the tie-break is
    /// unspecified, matching the listing order of the underlying file system.
    fn find_project_file(&self, dir: &Path) -> Option<PathBuf> {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "Failed to read directory, skipping");
                return None;
            }
        };

        entries
            .into_iter()
            .find(|e| e.is_file() && e.file_name().ends_with(&self.suffix_pattern))
            .map(|e| e.path)
    }

    /// Build the descriptor for a directory containing a project file
    ///
    /// Returns `None` when the directory has no project file, the file is
    /// unreadable, or no `TEMPLATE` line is present. The last case drops the
    /// directory from the tree without a notification.
    fn descriptor_for_dir(&self, dir: &Path) -> Option<ProjectDescriptor> {
        let project_file = self.find_project_file(dir)?;

        let content = match self.fs.read_to_string(&project_file) {
            Ok(content) => content,
            Err(err) => {
                warn!(file = %project_file.display(), error = %err, "Failed to read project file, skipping");
                return None;
            }
        };

        let captures = match self.template_re.captures(&content) {
            Some(captures) => captures,
            None => {
                debug!(
                    file = %project_file.display(),
                    "Project file has no TEMPLATE line, dropping"
                );
                return None;
            }
        };

        let template = Template::parse(&captures[1]);
        let name = project_file
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(&self.suffix_pattern))
            .map(str::to_string)?;

        Some(ProjectDescriptor::new(name, project_file, template))
    }
}
