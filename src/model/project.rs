use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::{Task, TaskPatch};
use crate::calendar::BusinessCalendar;

/// Default duration for freshly created tasks, in business days.
const DEFAULT_TASK_DURATION: i64 = 5;
/// Business-day gap between the previous last task and a new one.
const NEW_TASK_BUFFER: i64 = 2;

/// A Gantt project: an ordered task list plus identity metadata.
///
/// Task order is significant — the hierarchy is encoded by adjacency and
/// `level`, so reordering rows is a plain list operation with no pointer
/// fixup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub tasks: Vec<Task>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Untitled Project".to_string(),
            tasks: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Append a new task after the current last one.
    ///
    /// The task inherits the last task's level, runs for the default
    /// duration, and starts two business days after the last task ends,
    /// nudged forward onto a working day. An empty project starts today.
    /// Returns the new task's id.
    pub fn add_task(&mut self, calendar: &BusinessCalendar) -> Uuid {
        let (start, level) = match self.tasks.last() {
            Some(last) => {
                let start = calendar.add_days(last.end, NEW_TASK_BUFFER, true);
                (calendar.next_business_day(start), last.level)
            }
            None => (Utc::now().date_naive(), 0),
        };

        let mut task = Task::new("New Task", start, DEFAULT_TASK_DURATION, calendar);
        task.level = level;
        let id = task.id;
        self.tasks.push(task);
        self.touch();
        id
    }

    /// Remove a task by id. Dependents are not cascaded; their
    /// references to the removed id simply dangle and are ignored by
    /// the engine.
    pub fn remove_task(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
        self.touch();
    }

    /// Apply a field-level patch to the task with the given id.
    pub fn update_task(&mut self, id: Uuid, patch: TaskPatch, calendar: &BusinessCalendar) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply_patch(patch, calendar);
            self.touch();
        }
    }

    /// Indent a task one level, making it a child of the row above.
    ///
    /// Refused when it would open a level gap: a row may only go one
    /// level deeper than its predecessor.
    pub fn indent_task(&mut self, id: Uuid, calendar: &BusinessCalendar) {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        if idx == 0 {
            return;
        }
        if self.tasks[idx].level <= self.tasks[idx - 1].level {
            let level = self.tasks[idx].level + 1;
            self.update_task(id, TaskPatch::level(level), calendar);
        }
    }

    /// Outdent a task one level, stopping at the root.
    pub fn outdent_task(&mut self, id: Uuid, calendar: &BusinessCalendar) {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        if self.tasks[idx].level > 0 {
            let level = self.tasks[idx].level - 1;
            self.update_task(id, TaskPatch::level(level), calendar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_add_task_to_empty_project() {
        let cal = BusinessCalendar::default();
        let mut project = Project::new("Empty");
        let id = project.add_task(&cal);
        assert_eq!(project.tasks.len(), 1);
        let task = &project.tasks[0];
        assert_eq!(task.id, id);
        assert_eq!(task.level, 0);
        assert_eq!(task.duration, 5);
    }

    #[test]
    fn test_add_task_follows_last_with_buffer() {
        let cal = BusinessCalendar::default();
        let mut project = Project::new("P");
        // Last task ends Friday 2024-01-05.
        let mut prior = Task::new("First", date("2024-01-01"), 5, &cal);
        prior.level = 2;
        project.tasks.push(prior);

        project.add_task(&cal);
        let task = &project.tasks[1];
        // Friday + 2 business days is Monday.
        assert_eq!(task.start, date("2024-01-08"));
        assert!(cal.is_business_day(task.start));
        assert_eq!(task.level, 2);
    }

    #[test]
    fn test_remove_task_leaves_dangling_dependencies() {
        let cal = BusinessCalendar::default();
        let mut project = Project::new("P");
        let a = Task::new("A", date("2024-01-01"), 1, &cal);
        let mut b = Task::new("B", date("2024-01-02"), 1, &cal);
        b.dependencies.push(a.id);
        let (a_id, b_id) = (a.id, b.id);
        project.tasks = vec![a, b];

        project.remove_task(a_id);
        assert_eq!(project.tasks.len(), 1);
        // The reference dangles by design.
        assert_eq!(project.tasks[0].id, b_id);
        assert_eq!(project.tasks[0].dependencies, vec![a_id]);
    }

    #[test]
    fn test_indent_guards_against_level_gaps() {
        let cal = BusinessCalendar::default();
        let mut project = Project::new("P");
        let a = Task::new("A", date("2024-01-01"), 1, &cal);
        let b = Task::new("B", date("2024-01-02"), 1, &cal);
        let b_id = b.id;
        project.tasks = vec![a, b];

        project.indent_task(b_id, &cal);
        assert_eq!(project.tasks[1].level, 1);
        // A second indent would jump past the predecessor's level.
        project.indent_task(b_id, &cal);
        assert_eq!(project.tasks[1].level, 1);
    }

    #[test]
    fn test_outdent_stops_at_root() {
        let cal = BusinessCalendar::default();
        let mut project = Project::new("P");
        let mut a = Task::new("A", date("2024-01-01"), 1, &cal);
        a.level = 1;
        let a_id = a.id;
        project.tasks = vec![a];

        project.outdent_task(a_id, &cal);
        assert_eq!(project.tasks[0].level, 0);
        project.outdent_task(a_id, &cal);
        assert_eq!(project.tasks[0].level, 0);
    }
}
