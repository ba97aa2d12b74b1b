//! Logging-based notifier

use super::{HostNotification, Notifier};
use tracing::info;

/// Notifier that surfaces notifications through tracing
///
/// Useful for hosts without a message channel of their own, and as the
/// default sink in headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, notification: &HostNotification) {
        match notification {
            HostNotification::WorkspaceNotRecognized { root } => {
                info!(root = %root, "Workspace is not a recognized project");
            }
            HostNotification::BuildRequested { project } => {
                info!(project = %project, "Building project");
            }
            HostNotification::DeployRequested { project } => {
                info!(project = %project, "Deploying project");
            }
        }
    }
}
