//! Board state: the drag gesture state machine, optimistic updates and rollback.

mod column;
mod controller;
mod drag_state;
mod drop_target;
mod outcome;
mod pending_move;
mod summary;
mod viewer;

pub use column::{Column, build_columns};
pub use controller::{BoardController, UpdateHook};
pub use drag_state::DragState;
pub use drop_target::DropTarget;
pub use outcome::{DropOutcome, MoveOutcome, MoveResolution};
pub use pending_move::{MoveKind, PendingMove};
pub use summary::BoardSummary;
pub use viewer::Viewer;
