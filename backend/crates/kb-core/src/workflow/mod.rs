//! Workflow policy for the board.
//!
//! Tasks advance through a fixed linear order one step at a time and may move
//! backward freely. The order is small and fixed, so every check is an index
//! lookup into [`WORKFLOW_ORDER`].

mod policy;
mod policy_violation;
mod transition;

pub use policy::{
    WORKFLOW_ORDER, describe_workflow, is_valid_transition, required_predecessor,
    workflow_position,
};
pub use policy_violation::PolicyViolation;
pub use transition::Transition;
