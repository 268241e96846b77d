mod notification;
mod sink;

pub use notification::{Notification, Severity};
pub use sink::{LogNotifier, NotificationSink, RecordingNotifier};
