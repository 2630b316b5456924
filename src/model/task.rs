use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::BusinessCalendar;

/// Completion state of a task, carried as display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

/// What an attachment points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    File,
    Link,
}

/// A file or link attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub kind: AttachmentKind,
    pub created_at: DateTime<Utc>,
}

/// A single row in the Gantt chart.
///
/// Hierarchy is encoded by list order plus `level`: a task is a parent
/// iff the immediately following task has a strictly greater level, and
/// its children are the contiguous run of level + 1 tasks that follows.
/// Parent spans and progress are derived by rollup and never edited
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    /// First day of the task (UTC calendar date).
    pub start: NaiveDate,
    /// Last day of the task, inclusive: duration 1 means `start == end`.
    pub end: NaiveDate,
    /// Span in business days, kept consistent with `start`/`end`.
    pub duration: i64,
    /// Progress from 0 (not started) to 100 (complete).
    pub progress: u8,
    /// Ids of predecessor tasks. Back-references only; ids that no
    /// longer resolve are ignored, not errors.
    pub dependencies: Vec<Uuid>,
    /// Indentation depth; 0 is a root row.
    pub level: u32,
    /// Whether this row's descendants are hidden.
    pub is_collapsed: bool,
    pub attachments: Vec<Attachment>,
    pub assignee: Option<String>,
    /// Display color as a hex code.
    pub color: Option<String>,
    pub status: TaskStatus,
}

impl Task {
    /// Create a new task with sensible defaults.
    ///
    /// `end` is derived from `start` and `duration` in business-day
    /// terms.
    pub fn new(
        name: impl Into<String>,
        start: NaiveDate,
        duration: i64,
        calendar: &BusinessCalendar,
    ) -> Self {
        let duration = duration.max(1);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end: calendar.add_days(start, duration, true),
            duration,
            progress: 0,
            dependencies: Vec::new(),
            level: 0,
            is_collapsed: false,
            attachments: Vec::new(),
            assignee: None,
            color: None,
            status: TaskStatus::NotStarted,
        }
    }

    /// Apply a field-level patch, re-deriving whichever of
    /// `end`/`duration` depends on the edited fields.
    ///
    /// Editing `start` or `duration` makes `end` the derived field;
    /// editing only `end` makes `duration` the derived field.
    pub fn apply_patch(&mut self, patch: TaskPatch, calendar: &BusinessCalendar) {
        let dates_edited = patch.start.is_some() || patch.duration.is_some();
        let end_edited = patch.end.is_some();

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration.max(1);
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress.min(100);
        }
        if let Some(dependencies) = patch.dependencies {
            self.dependencies = dependencies;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(is_collapsed) = patch.is_collapsed {
            self.is_collapsed = is_collapsed;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }

        if dates_edited {
            self.end = calendar.add_days(self.start, self.duration, true);
        } else if end_edited {
            self.duration = calendar.diff_days(self.start, self.end, true);
        }
    }
}

/// A partial update to a task. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub duration: Option<i64>,
    pub progress: Option<u8>,
    pub dependencies: Option<Vec<Uuid>>,
    pub level: Option<u32>,
    pub is_collapsed: Option<bool>,
    pub assignee: Option<Option<String>>,
    pub color: Option<Option<String>>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn start(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            ..Default::default()
        }
    }

    pub fn end(end: NaiveDate) -> Self {
        Self {
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn duration(duration: i64) -> Self {
        Self {
            duration: Some(duration),
            ..Default::default()
        }
    }

    pub fn level(level: u32) -> Self {
        Self {
            level: Some(level),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_new_task_derives_end() {
        let cal = BusinessCalendar::default();
        // Monday, 5 working days -> Friday.
        let task = Task::new("Design", date("2024-01-01"), 5, &cal);
        assert_eq!(task.end, date("2024-01-05"));
        assert_eq!(task.duration, 5);
        assert_eq!(task.progress, 0);
    }

    #[test]
    fn test_duration_clamped_to_one() {
        let cal = BusinessCalendar::default();
        let task = Task::new("Zero", date("2024-01-01"), 0, &cal);
        assert_eq!(task.duration, 1);
        assert_eq!(task.start, task.end);
    }

    #[test]
    fn test_patch_duration_rederives_end() {
        let cal = BusinessCalendar::default();
        let mut task = Task::new("T", date("2024-01-01"), 5, &cal);
        task.apply_patch(TaskPatch::duration(6), &cal);
        // 6 working days from Monday lands on the next Monday.
        assert_eq!(task.end, date("2024-01-08"));
    }

    #[test]
    fn test_patch_start_rederives_end() {
        let cal = BusinessCalendar::default();
        let mut task = Task::new("T", date("2024-01-01"), 2, &cal);
        task.apply_patch(TaskPatch::start(date("2024-01-05")), &cal);
        // Friday + 2 working days ends Monday.
        assert_eq!(task.end, date("2024-01-08"));
        assert_eq!(task.duration, 2);
    }

    #[test]
    fn test_patch_end_rederives_duration() {
        let cal = BusinessCalendar::default();
        let mut task = Task::new("T", date("2024-01-01"), 1, &cal);
        task.apply_patch(TaskPatch::end(date("2024-01-08")), &cal);
        assert_eq!(task.duration, 6);
        assert_eq!(task.end, date("2024-01-08"));
    }

    #[test]
    fn test_task_serde_shape() {
        let cal = BusinessCalendar::default();
        let task = Task::new("Wire", date("2024-01-01"), 1, &cal);
        let json = serde_json::to_value(&task).unwrap();
        // Dates travel in the YYYY-MM-DD wire form.
        assert_eq!(json["start"], "2024-01-01");
        assert_eq!(json["end"], "2024-01-01");
        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back.start, task.start);
        assert_eq!(back.id, task.id);
    }
}
