//! Task board domain: data model, workflow policy and the board state controller.

pub mod board;
pub mod error;
pub mod gateway;
pub mod models;
pub mod notification;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use board::{
    BoardController, BoardSummary, Column, DragState, DropOutcome, DropTarget, MoveKind,
    MoveOutcome, MoveResolution, PendingMove, UpdateHook, Viewer, build_columns,
};
pub use error::{CoreError, Result as CoreResult};
pub use gateway::{GatewayError, TaskGateway};
pub use models::activity_entry::{ActivityAction, ActivityEntry};
pub use models::attachment::Attachment;
pub use models::issue_type::IssueType;
pub use models::label::{MAX_LABEL_LENGTH, validate_label};
pub use models::priority::Priority;
pub use models::task::Task;
pub use models::task_id::TaskId;
pub use models::task_patch::TaskPatch;
pub use models::task_status::TaskStatus;
pub use models::ticket_link::{LinkKind, TicketLink};
pub use notification::{LogNotifier, Notification, NotificationSink, RecordingNotifier, Severity};
pub use workflow::{
    PolicyViolation, Transition, WORKFLOW_ORDER, describe_workflow, is_valid_transition,
    required_predecessor, workflow_position,
};
