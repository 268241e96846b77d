pub mod activity_entry;
pub mod attachment;
pub mod issue_type;
pub mod label;
pub mod priority;
pub mod task;
pub mod task_id;
pub mod task_patch;
pub mod task_status;
pub mod ticket_link;
