use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::Task;

/// Ids of tasks that start before a declared predecessor has finished.
///
/// A task is in conflict iff at least one of its dependency ids resolves
/// to an existing task whose `end` is strictly after the task's `start`.
/// Dangling ids are skipped. The check is local and non-transitive; no
/// attempt is made to repair the schedule.
pub fn conflicted_ids(tasks: &[Task]) -> HashSet<Uuid> {
    let mut conflicts = HashSet::new();

    for task in tasks {
        for dep_id in &task.dependencies {
            if let Some(predecessor) = tasks.iter().find(|t| t.id == *dep_id) {
                if task.start < predecessor.end {
                    conflicts.insert(task.id);
                    break;
                }
            }
        }
    }

    conflicts
}

/// Ids of tasks whose end has passed without the work being complete.
pub fn overdue_ids(tasks: &[Task], today: NaiveDate) -> HashSet<Uuid> {
    tasks
        .iter()
        .filter(|t| t.end < today && t.progress < 100)
        .map(|t| t.id)
        .collect()
}
