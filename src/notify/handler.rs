//! Notifier trait and host-facing notifications

/// User-facing notifications the library asks the host to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostNotification {
    /// Workspace root has no project file at top level
    WorkspaceNotRecognized { root: String },

    /// Build action acknowledged for a project
    BuildRequested { project: String },

    /// Deploy action acknowledged for a project
    DeployRequested { project: String },
}

/// Trait for delivering notifications to the host environment
///
/// Implementations must be non-blocking relative to the caller: scans and
/// actions run on the host's callback thread.
pub trait Notifier: Send + Sync {
    /// Called when a user-facing notification occurs
    fn notify(&self, notification: &HostNotification);
}

/// No-op notifier that ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _notification: &HostNotification) {
        // Intentionally empty
    }
}
