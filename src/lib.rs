//! proscout - workspace discovery and tree presentation for qmake projects
//!
//! This library discovers project files with a fixed suffix (`.pro` by
//! default) inside a workspace, classifies each by the `TEMPLATE` line in its
//! contents, and exposes the results through the pull-based protocol a host
//! tree view expects. It is decoupled from any UI toolkit: an editor plugin
//! bridge, a TUI, or a test harness drives it entirely through callbacks.
//!
//! # Core Concepts
//!
//! - **Project Scanner**: walks one directory level at a time, building a
//!   [`ProjectDescriptor`] for each directory that contains a project file
//! - **Tree Presenter**: answers "what are the children of this node" on
//!   demand and emits a coarse invalidation signal on manual refresh
//! - **Notifier**: the channel through which user-facing messages and
//!   action acknowledgments reach the host
//!
//! # Example Usage
//!
//! ```no_run
//! use proscout::{
//!     ProjectScanner, ProjectTreeProvider, RealFileSystem, TreeSource, WorkspaceConfig,
//! };
//! use std::path::PathBuf;
//!
//! let config = WorkspaceConfig::new(Some(PathBuf::from("/ws")));
//! let scanner = ProjectScanner::new(config, RealFileSystem::new());
//! let provider = ProjectTreeProvider::new(scanner);
//!
//! for root in provider.children(None) {
//!     println!("{} ({})", root.name, root.template);
//!     if root.is_expandable() {
//!         for child in provider.children(Some(&root)) {
//!             println!("  {} ({})", child.name, child.template);
//!         }
//!     }
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`scanner`]: directory scanning and TEMPLATE classification
//! - [`tree`]: pull-based tree presenter with invalidation
//! - [`actions`]: build/deploy stub dispatch
//! - [`notify`]: host notification channel

// Public modules
pub mod actions;
pub mod config;
pub mod fs;
pub mod notify;
pub mod project;
pub mod scanner;
pub mod tree;
pub mod util;

// Re-export key types for convenient access
pub use actions::ActionDispatcher;
pub use config::{ConfigError, WorkspaceConfig, DEFAULT_PROJECT_SUFFIX};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use notify::{HostNotification, LoggingNotifier, NoOpNotifier, Notifier};
pub use project::{ProjectDescriptor, Template};
pub use scanner::ProjectScanner;
pub use tree::{InvalidationListener, ProjectTreeProvider, TreeSource};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
