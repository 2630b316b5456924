use std::collections::{HashSet, VecDeque};

use chrono::NaiveDate;
use log::{debug, trace};
use uuid::Uuid;

use crate::calendar::BusinessCalendar;
use crate::engine::rollup::is_parent;
use crate::model::Task;

/// The two gestures a task bar supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Drag the whole bar: shift dates, keep duration.
    Move,
    /// Drag the right edge: change duration, keep the start.
    Resize,
}

/// State carried across one drag gesture on a leaf task.
///
/// Everything is computed against the snapshot taken when the gesture
/// started, never against intermediate mutated state, so repeated
/// pixel-delta rounding cannot accumulate drift across motion events.
/// Dropping the session is the gesture's single cancellation point: an
/// abandoned drag leaves the last-committed task list intact.
#[derive(Debug, Clone)]
pub struct DragSession {
    task_id: Uuid,
    kind: DragKind,
    origin_x: f32,
    original_start: NaiveDate,
    original_duration: i64,
    snapshot: Vec<Task>,
}

impl DragSession {
    /// Start a gesture on the task with the given id.
    ///
    /// Returns `None` for unknown ids and for summary rows: parent dates
    /// are derived by rollup and are not directly draggable.
    pub fn begin(tasks: &[Task], task_id: Uuid, kind: DragKind, pointer_x: f32) -> Option<Self> {
        let idx = tasks.iter().position(|t| t.id == task_id)?;
        if is_parent(tasks, idx) {
            return None;
        }

        let task = &tasks[idx];
        debug!(
            "drag start: task={} kind={:?} start={} duration={}",
            task_id, kind, task.start, task.duration
        );
        Some(Self {
            task_id,
            kind,
            origin_x: pointer_x,
            original_start: task.start,
            original_duration: task.duration,
            snapshot: tasks.to_vec(),
        })
    }

    pub fn task_id(&self) -> Uuid {
        self.task_id
    }

    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Signed day delta for the current pointer position.
    fn day_delta(&self, pointer_x: f32, pixels_per_day: f32) -> i64 {
        ((pointer_x - self.origin_x) / pixels_per_day).round() as i64
    }

    /// Produce the replacement task list for one motion event.
    ///
    /// The input list is the current committed state; the output is a
    /// full replacement in the same order. The last event's delta wins.
    pub fn apply(
        &self,
        tasks: &[Task],
        pointer_x: f32,
        pixels_per_day: f32,
        calendar: &BusinessCalendar,
    ) -> Vec<Task> {
        let delta_days = self.day_delta(pointer_x, pixels_per_day);
        trace!("drag update: task={} delta_days={}", self.task_id, delta_days);

        match self.kind {
            DragKind::Resize => self.apply_resize(tasks, delta_days, calendar),
            DragKind::Move => self.apply_move(tasks, delta_days, calendar),
        }
    }

    fn apply_resize(
        &self,
        tasks: &[Task],
        delta_days: i64,
        calendar: &BusinessCalendar,
    ) -> Vec<Task> {
        let duration = (self.original_duration + delta_days).max(1);
        tasks
            .iter()
            .map(|task| {
                let mut task = task.clone();
                if task.id == self.task_id {
                    task.start = self.original_start;
                    task.duration = duration;
                    task.end = calendar.add_days(task.start, duration, true);
                }
                task
            })
            .collect()
    }

    fn apply_move(
        &self,
        tasks: &[Task],
        delta_days: i64,
        calendar: &BusinessCalendar,
    ) -> Vec<Task> {
        let affected = self.affected_set();
        tasks
            .iter()
            .map(|task| {
                let mut task = task.clone();
                if affected.contains(&task.id) {
                    // Shift from the snapshot values, not the live ones.
                    if let Some(original) = self.snapshot.iter().find(|t| t.id == task.id) {
                        task.start = calendar.add_days(original.start, delta_days, false);
                        task.end = calendar.add_days(task.start, original.duration, true);
                    }
                }
                task
            })
            .collect()
    }

    /// The dragged task plus everything transitively connected to it by
    /// dependency edges, traversed in both directions over the snapshot.
    ///
    /// Successors (rows depending on a member) and predecessors (rows a
    /// member depends on) move rigidly together so that a mid-chain move
    /// cannot silently open a gap against untouched neighbors; any
    /// conflict that remains is reported by detection afterwards.
    fn affected_set(&self) -> HashSet<Uuid> {
        let mut affected = HashSet::from([self.task_id]);
        let mut queue = VecDeque::from([self.task_id]);

        while let Some(current) = queue.pop_front() {
            for task in &self.snapshot {
                if task.dependencies.contains(&current) && affected.insert(task.id) {
                    queue.push_back(task.id);
                }
            }
            if let Some(task) = self.snapshot.iter().find(|t| t.id == current) {
                for dep_id in &task.dependencies {
                    // Dangling ids enter the set but match no row later.
                    if affected.insert(*dep_id) {
                        queue.push_back(*dep_id);
                    }
                }
            }
        }

        affected
    }
}
