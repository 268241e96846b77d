use crate::tests::id;
use crate::{
    LogNotifier, Notification, NotificationSink, PolicyViolation, RecordingNotifier, Severity,
    TaskStatus,
};

#[test]
fn given_each_variant_then_severity_matches() {
    let moved = Notification::Moved {
        task_id: id("a"),
        to: TaskStatus::Testing,
    };
    let failed = Notification::Failed {
        task_id: id("a"),
        message: "boom".into(),
    };
    let rejected = Notification::Rejected {
        task_id: id("a"),
        violation: PolicyViolation::Sealed {
            status: TaskStatus::Done,
        },
    };

    assert_eq!(moved.severity(), Severity::Success);
    assert_eq!(failed.severity(), Severity::Error);
    assert_eq!(rejected.severity(), Severity::Error);
    assert_eq!(rejected.task_id(), &id("a"));
}

#[test]
fn given_recording_notifier_when_taken_then_drained() {
    let notifier = RecordingNotifier::new();
    let clone = notifier.clone();

    clone.notify(Notification::Approved { task_id: id("x") });

    assert_eq!(notifier.take().len(), 1);
    assert!(notifier.recorded().is_empty());
}

#[test]
fn given_log_notifier_then_notify_does_not_panic() {
    LogNotifier.notify(Notification::Failed {
        task_id: id("x"),
        message: "HTTP 500".into(),
    });
}

#[tokio::test]
async fn given_channel_sink_then_notifications_are_forwarded() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    tx.notify(Notification::Approved { task_id: id("x") });

    assert_eq!(
        rx.recv().await,
        Some(Notification::Approved { task_id: id("x") })
    );
}

#[test]
fn given_closed_channel_then_notify_is_silent() {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Notification>();
    drop(rx);

    tx.notify(Notification::Approved { task_id: id("x") });
}
