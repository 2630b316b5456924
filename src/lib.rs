//! Scheduling core for hierarchical Gantt charts.
//!
//! The crate owns the computational heart of a Gantt editor and nothing
//! else: UI, persistence, and sharing live in the consuming application
//! and exchange plain task lists with this core.
//!
//! - [`calendar`]: business-day-aware date arithmetic
//! - [`model`]: `Task`, `Project`, and the timeline window/viewport
//! - [`engine`]: rollup, visibility projection, conflict detection, and
//!   snapshot-based drag propagation
//!
//! The intended recomputation pass after any change to the task list:
//! [`engine::rollup()`] first, then [`engine::visible_tasks`],
//! [`engine::conflicted_ids`], and [`model::TimelineRange::covering`]
//! over the rolled-up result. Drag gestures write to the raw list via
//! [`engine::DragSession`] and their output re-enters the same pass.

pub mod calendar;
pub mod engine;
pub mod model;

pub use calendar::{BusinessCalendar, CalendarError};
pub use engine::{conflicted_ids, overdue_ids, rollup, visible_tasks, DragKind, DragSession};
pub use model::{Project, Task, TaskPatch, TaskStatus, TimelineRange, TimelineViewport};
