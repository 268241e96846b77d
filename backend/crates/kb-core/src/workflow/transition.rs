use crate::{PolicyViolation, TaskStatus, is_valid_transition, required_predecessor, workflow_position};

/// A requested status change, checked against the workflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: TaskStatus,
    pub to: TaskStatus,
}

impl Transition {
    pub fn new(from: TaskStatus, to: TaskStatus) -> Self {
        Self { from, to }
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Sealed origins are refused before the order is consulted.
    pub fn check(&self) -> Result<(), PolicyViolation> {
        if self.from.is_sealed() {
            return Err(PolicyViolation::Sealed { status: self.from });
        }

        if is_valid_transition(self.from, self.to) {
            return Ok(());
        }

        if workflow_position(self.from).is_none() || workflow_position(self.to).is_none() {
            return Err(PolicyViolation::OutsideWorkflow {
                from: self.from,
                to: self.to,
            });
        }

        Err(PolicyViolation::SkippedStep {
            from: self.from,
            to: self.to,
            required: required_predecessor(self.to),
        })
    }
}
