use crate::{
    BoardSummary, Column, DragState, DropOutcome, DropTarget, GatewayError, MoveKind, MoveOutcome,
    MoveResolution, Notification, NotificationSink, PendingMove, PolicyViolation, Task,
    TaskGateway, TaskId, TaskPatch, TaskStatus, Transition, Viewer, build_columns,
    is_valid_transition,
};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, info, warn};

/// Called after a move is persisted so the owning view can patch its own cache.
pub type UpdateHook = Box<dyn FnMut(&TaskId, &TaskPatch) + Send>;

/// Session-local board state.
///
/// `server_tasks` is the last server-confirmed snapshot and is only replaced
/// after the gateway confirms a change. `displayed_tasks` is the working copy:
/// the snapshot plus optimistic statuses for in-flight moves and the current
/// drag preview. Every rejection or failure rebuilds the working copy from the
/// snapshot.
pub struct BoardController {
    server_tasks: Vec<Task>,
    displayed_tasks: Vec<Task>,
    drag: DragState,
    in_flight: BTreeMap<TaskId, PendingMove>,
    viewer: Viewer,
    notifier: Box<dyn NotificationSink>,
    on_task_update: Option<UpdateHook>,
    epoch: u64,
    next_seq: u64,
    mounted: bool,
}

impl BoardController {
    pub fn new(tasks: Vec<Task>, viewer: Viewer, notifier: impl NotificationSink + 'static) -> Self {
        Self {
            displayed_tasks: tasks.clone(),
            server_tasks: tasks,
            drag: DragState::Idle,
            in_flight: BTreeMap::new(),
            viewer,
            notifier: Box::new(notifier),
            on_task_update: None,
            epoch: 0,
            next_seq: 0,
            mounted: true,
        }
    }

    pub fn with_update_hook(mut self, hook: impl FnMut(&TaskId, &TaskPatch) + Send + 'static) -> Self {
        self.on_task_update = Some(Box::new(hook));
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn displayed_tasks(&self) -> &[Task] {
        &self.displayed_tasks
    }

    pub fn server_tasks(&self) -> &[Task] {
        &self.server_tasks
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Tasks with a gateway call outstanding, with their optimistic status.
    pub fn in_flight(&self) -> &BTreeMap<TaskId, PendingMove> {
        &self.in_flight
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.displayed_tasks.iter().find(|t| &t.id == task_id)
    }

    pub fn columns(&self) -> Vec<Column<'_>> {
        build_columns(&self.displayed_tasks)
    }

    pub fn closed_tasks(&self) -> Vec<&Task> {
        self.displayed_tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Closed)
            .collect()
    }

    pub fn summary(&self, today: NaiveDate) -> BoardSummary {
        BoardSummary::from_tasks(&self.displayed_tasks, today)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Take a fresh server snapshot. Outstanding moves become stale.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        debug!("Board reloaded with {} tasks", tasks.len());
        self.displayed_tasks = tasks.clone();
        self.server_tasks = tasks;
        self.drag = DragState::Idle;
        self.in_flight.clear();
        self.epoch += 1;
    }

    /// Results arriving after this are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.drag = DragState::Idle;
    }

    // =========================================================================
    // Drag gesture
    // =========================================================================

    /// Lift a card. Returns false when the card cannot be dragged.
    pub fn drag_start(&mut self, task_id: &TaskId) -> bool {
        if !self.drag.is_idle() {
            debug!("Drag started while another gesture was active, discarding it");
            self.drag = DragState::Idle;
            self.restore_display();
        }

        let Some(task) = self.server_task(task_id) else {
            debug!("Drag refused: unknown task {task_id}");
            return false;
        };

        if self.in_flight.contains_key(task_id) {
            debug!("Drag refused: task {task_id} is still being saved");
            return false;
        }

        if !self.viewer.can_move(task) {
            debug!("Drag refused: viewer may not move task {task_id}");
            return false;
        }

        let original = task.status;
        debug!("Drag start: {task_id} ({original})");
        self.drag = DragState::Dragging {
            task_id: task_id.clone(),
            original,
        };
        true
    }

    /// Pointer moved over a new target. Only touches the working copy.
    pub fn drag_over(&mut self, target: &DropTarget) {
        let (task_id, original) = match self.drag {
            DragState::Idle => return,
            DragState::Dragging {
                ref task_id,
                original,
            }
            | DragState::Previewing {
                ref task_id,
                original,
                ..
            } => (task_id.clone(), original),
        };

        if matches!(target, DropTarget::Task(over) if *over == task_id) {
            return;
        }

        let Some(candidate) = self.resolve_target(target) else {
            return;
        };

        self.drag = DragState::Previewing {
            task_id: task_id.clone(),
            original,
            candidate,
        };

        if original.is_sealed() {
            return;
        }

        if is_valid_transition(original, candidate) {
            self.set_displayed_status(&task_id, candidate);
        } else {
            self.set_displayed_status(&task_id, original);
        }
    }

    /// Abort the gesture without a drop.
    pub fn cancel_drag(&mut self) {
        if !self.drag.is_idle() {
            self.drag = DragState::Idle;
            self.restore_display();
        }
    }

    /// Release the card. Valid moves come back as [`DropOutcome::Pending`].
    pub fn drop_on(&mut self, target: Option<&DropTarget>) -> DropOutcome {
        let (task_id, original) = match std::mem::take(&mut self.drag) {
            DragState::Idle => return DropOutcome::Ignored,
            DragState::Dragging { task_id, original }
            | DragState::Previewing {
                task_id, original, ..
            } => (task_id, original),
        };

        let Some(target) = target else {
            self.restore_display();
            return DropOutcome::Cancelled;
        };

        let final_status = match self.resolve_target(target) {
            Some(status) => status,
            None => self.task(&task_id).map(|t| t.status).unwrap_or(original),
        };

        let transition = Transition::new(original, final_status);

        if original.is_sealed() {
            return self.reject(task_id, PolicyViolation::Sealed { status: original });
        }

        if transition.is_noop() {
            self.restore_display();
            return DropOutcome::Unchanged;
        }

        if let Err(violation) = transition.check() {
            return self.reject(task_id, violation);
        }

        debug!("Drop accepted: {task_id} {original} → {final_status}");
        self.set_displayed_status(&task_id, final_status);
        DropOutcome::Pending(self.track(task_id, original, final_status, MoveKind::Drag))
    }

    /// Explicit approval of a `Done` task into `Closed`. Owners only.
    pub fn request_close(&mut self, task_id: &TaskId) -> Result<PendingMove, PolicyViolation> {
        let checked = match self.server_task(task_id) {
            None => Err(PolicyViolation::UnknownTask {
                task_id: task_id.clone(),
            }),
            Some(_)
                if self.in_flight.contains_key(task_id)
                    || self.drag.task_id() == Some(task_id) =>
            {
                Err(PolicyViolation::MoveInFlight {
                    task_id: task_id.clone(),
                })
            }
            Some(_) if !self.viewer.can_approve() => Err(PolicyViolation::NotPermitted {
                task_id: task_id.clone(),
            }),
            Some(task) if task.status != TaskStatus::Done => {
                Err(PolicyViolation::NotDone { status: task.status })
            }
            Some(task) => Ok(task.status),
        };

        let from = match checked {
            Ok(from) => from,
            Err(violation) => {
                self.reject(task_id.clone(), violation.clone());
                return Err(violation);
            }
        };

        self.set_displayed_status(task_id, TaskStatus::Closed);
        Ok(self.track(task_id.clone(), from, TaskStatus::Closed, MoveKind::Approval))
    }

    /// Settle a pending move with the gateway's answer.
    pub fn complete(
        &mut self,
        pending: PendingMove,
        result: Result<(), GatewayError>,
    ) -> MoveResolution {
        if !self.mounted || pending.epoch != self.epoch {
            debug!(
                "Ignoring stale result for {} ({} → {})",
                pending.task_id, pending.from, pending.to
            );
            return MoveResolution::Stale;
        }

        if self.in_flight.get(&pending.task_id) != Some(&pending) {
            debug!(
                "Ignoring result for {}: move {} → {} is no longer in flight",
                pending.task_id, pending.from, pending.to
            );
            return MoveResolution::Stale;
        }

        self.in_flight.remove(&pending.task_id);

        match result {
            Ok(()) => {
                let patch = pending.patch();
                if let Some(task) = self
                    .server_tasks
                    .iter_mut()
                    .find(|t| t.id == pending.task_id)
                {
                    task.apply_patch(&patch);
                }
                self.restore_display();

                info!("Task status updated: {} → {}", pending.task_id, pending.to);
                let notification = match pending.kind {
                    MoveKind::Drag => Notification::Moved {
                        task_id: pending.task_id.clone(),
                        to: pending.to,
                    },
                    MoveKind::Approval => Notification::Approved {
                        task_id: pending.task_id.clone(),
                    },
                };
                self.notifier.notify(notification);

                if let Some(ref mut hook) = self.on_task_update {
                    hook(&pending.task_id, &patch);
                }

                MoveResolution::Persisted {
                    task_id: pending.task_id,
                    status: pending.to,
                }
            }
            Err(error) => {
                warn!(
                    "Failed to update task {} to {}: {}",
                    pending.task_id, pending.to, error
                );
                self.restore_display();
                self.notifier.notify(Notification::Failed {
                    task_id: pending.task_id.clone(),
                    message: error.message.clone(),
                });

                MoveResolution::RolledBack {
                    task_id: pending.task_id,
                    error,
                }
            }
        }
    }

    /// Drop and, for a valid move, await the gateway before returning.
    pub async fn drop_and_persist(
        &mut self,
        target: Option<&DropTarget>,
        gateway: &dyn TaskGateway,
    ) -> MoveOutcome {
        match self.drop_on(target) {
            DropOutcome::Ignored => MoveOutcome::Ignored,
            DropOutcome::Cancelled => MoveOutcome::Cancelled,
            DropOutcome::Unchanged => MoveOutcome::Unchanged,
            DropOutcome::Rejected(violation) => MoveOutcome::Rejected(violation),
            DropOutcome::Pending(pending) => {
                let result = pending.send(gateway).await;
                self.complete(pending, result).into()
            }
        }
    }

    /// Approve and await the gateway before returning.
    pub async fn approve_and_persist(
        &mut self,
        task_id: &TaskId,
        gateway: &dyn TaskGateway,
    ) -> MoveOutcome {
        match self.request_close(task_id) {
            Ok(pending) => {
                let result = pending.send(gateway).await;
                self.complete(pending, result).into()
            }
            Err(violation) => MoveOutcome::Rejected(violation),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn server_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.server_tasks.iter().find(|t| &t.id == task_id)
    }

    fn track(
        &mut self,
        task_id: TaskId,
        from: TaskStatus,
        to: TaskStatus,
        kind: MoveKind,
    ) -> PendingMove {
        self.next_seq += 1;
        let pending = PendingMove {
            task_id: task_id.clone(),
            from,
            to,
            kind,
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.in_flight.insert(task_id, pending.clone());
        pending
    }

    fn resolve_target(&self, target: &DropTarget) -> Option<TaskStatus> {
        match target {
            DropTarget::Column(status) => Some(*status),
            DropTarget::Task(over) => self.task(over).map(|t| t.status),
        }
    }

    fn set_displayed_status(&mut self, task_id: &TaskId, status: TaskStatus) {
        if let Some(task) = self.displayed_tasks.iter_mut().find(|t| &t.id == task_id) {
            task.status = status;
        }
    }

    fn reject(&mut self, task_id: TaskId, violation: PolicyViolation) -> DropOutcome {
        info!("Move of {task_id} rejected: {violation}");
        self.restore_display();
        self.notifier.notify(Notification::Rejected {
            task_id,
            violation: violation.clone(),
        });
        DropOutcome::Rejected(violation)
    }

    /// Working copy = snapshot + in-flight moves + live preview.
    fn restore_display(&mut self) {
        self.displayed_tasks = self.server_tasks.clone();

        let in_flight: Vec<(TaskId, TaskStatus)> = self
            .in_flight
            .iter()
            .map(|(id, pending)| (id.clone(), pending.to))
            .collect();
        for (task_id, status) in in_flight {
            self.set_displayed_status(&task_id, status);
        }

        if let DragState::Previewing {
            ref task_id,
            original,
            candidate,
        } = self.drag
            && !original.is_sealed()
            && is_valid_transition(original, candidate)
        {
            let task_id = task_id.clone();
            self.set_displayed_status(&task_id, candidate);
        }
    }
}
