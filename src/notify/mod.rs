//! Host notification channel

mod handler;
mod logging;

pub use handler::{HostNotification, NoOpNotifier, Notifier};
pub use logging::LoggingNotifier;
