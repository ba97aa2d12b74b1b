//! Build and deploy action stubs
//!
//! No real build or deploy protocol exists yet; each action acknowledges the
//! request through the host notification channel. This is the surface a full
//! implementation would extend.

use crate::notify::{HostNotification, Notifier};
use crate::project::ProjectDescriptor;
use std::sync::Arc;
use tracing::info;

/// Forwards user-invoked project actions to the host
pub struct ActionDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl ActionDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn build(&self, project: &ProjectDescriptor) {
        info!(project = %project.name, path = %project.path.display(), "Build requested");
        self.notifier.notify(&HostNotification::BuildRequested {
            project: project.name.clone(),
        });
    }

    pub fn deploy(&self, project: &ProjectDescriptor) {
        info!(project = %project.name, path = %project.path.display(), "Deploy requested");
        self.notifier.notify(&HostNotification::DeployRequested {
            project: project.name.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Template;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct RecordingNotifier {
        notifications: Mutex<Vec<HostNotification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &HostNotification) {
            self.notifications.lock().unwrap().push(notification.clone());
        }
    }

    fn app_descriptor() -> ProjectDescriptor {
        ProjectDescriptor::new(
            "App1".to_string(),
            PathBuf::from("/ws/App1/App1.pro"),
            Template::App,
        )
    }

    #[test]
    fn test_build_acknowledges_once() {
        let notifier = Arc::new(RecordingNotifier {
            notifications: Mutex::new(Vec::new()),
        });
        let dispatcher = ActionDispatcher::new(notifier.clone());

        dispatcher.build(&app_descriptor());

        let recorded = notifier.notifications.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![HostNotification::BuildRequested {
                project: "App1".to_string(),
            }]
        );
    }

    #[test]
    fn test_deploy_acknowledges_once() {
        let notifier = Arc::new(RecordingNotifier {
            notifications: Mutex::new(Vec::new()),
        });
        let dispatcher = ActionDispatcher::new(notifier.clone());

        dispatcher.deploy(&app_descriptor());

        let recorded = notifier.notifications.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![HostNotification::DeployRequested {
                project: "App1".to_string(),
            }]
        );
    }
}
