mod label;
mod task;
mod task_status;
