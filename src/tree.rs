//! Tree presenter
//!
//! Exposes scan results through the pull-based protocol a host tree view
//! expects: the host asks for children on demand and re-fetches after an
//! invalidation signal. The provider holds no tree state of its own; every
//! `children` call goes back to the file system, so a refresh is nothing
//! more than telling the host its cached nodes are stale.

use crate::fs::FileSystem;
use crate::project::ProjectDescriptor;
use crate::scanner::ProjectScanner;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Pull-based hierarchical data source
///
/// `children(None)` answers the root-level query; `children(Some(node))`
/// answers an expansion. Implementations never fail: a node that cannot be
/// resolved simply contributes no children.
pub trait TreeSource: Send + Sync {
    fn children(&self, parent: Option<&ProjectDescriptor>) -> Vec<ProjectDescriptor>;
}

/// Callback invoked when previously returned nodes become stale
pub trait InvalidationListener: Send + Sync {
    fn on_invalidate(&self);
}

/// Tree presenter over a [`ProjectScanner`]
///
/// Invalidation is coarse: `refresh` always marks the whole tree stale,
/// never individual nodes.
pub struct ProjectTreeProvider<F: FileSystem> {
    scanner: ProjectScanner<F>,
    listeners: RwLock<Vec<Arc<dyn InvalidationListener>>>,
}

impl<F: FileSystem> ProjectTreeProvider<F> {
    pub fn new(scanner: ProjectScanner<F>) -> Self {
        Self {
            scanner,
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn scanner(&self) -> &ProjectScanner<F> {
        &self.scanner
    }

    /// Register a listener for the invalidation signal
    pub fn subscribe(&self, listener: Arc<dyn InvalidationListener>) {
        self.listeners.write().unwrap().push(listener);
    }

    /// Signal the host that the whole tree must be re-fetched
    pub fn refresh(&self) {
        let listeners = self.listeners.read().unwrap();
        debug!(listeners = listeners.len(), "Tree invalidated");
        for listener in listeners.iter() {
            listener.on_invalidate();
        }
    }
}

impl<F: FileSystem> TreeSource for ProjectTreeProvider<F> {
    fn children(&self, parent: Option<&ProjectDescriptor>) -> Vec<ProjectDescriptor> {
        match parent {
            None => self.scanner.scan(None),
            Some(node) => {
                // Children of a node live in the child directories of the
                // directory its project file sits in.
                let Some(dir) = node.path.parent() else {
                    warn!(node = %node.name, path = %node.path.display(), "Node path has no parent directory");
                    return Vec::new();
                };
                self.scanner.scan(Some(dir))
            }
        }
    }
}
