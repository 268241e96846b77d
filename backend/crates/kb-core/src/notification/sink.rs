use crate::{Notification, Severity};

use std::sync::{Arc, Mutex};

use log::{info, warn};
use tokio::sync::mpsc::UnboundedSender;

/// Outward surface for board feedback.
pub trait NotificationSink: Send {
    fn notify(&self, notification: Notification);
}

/// Writes notifications through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Success => info!("[{}] {}", notification.task_id(), notification),
            Severity::Error => warn!("[{}] {}", notification.task_id(), notification),
        }
    }
}

/// Forwards notifications to an event loop. A closed receiver drops them.
impl NotificationSink for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        let _ = self.send(notification);
    }
}

/// Keeps every notification in a shared list.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    recorded: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn take(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut guard) = self.recorded.lock() {
            guard.push(notification);
        }
    }
}
