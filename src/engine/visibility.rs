use crate::model::Task;

/// A task selected for display, paired with its index in the full list
/// so edits can be routed back to the source row.
#[derive(Debug, Clone, Copy)]
pub struct VisibleTask<'a> {
    pub task: &'a Task,
    pub original_index: usize,
}

/// Project the rolled-up list down to the rows that should be shown.
///
/// A collapsed row suppresses every following row at a strictly greater
/// level, regardless of nesting depth; the suppression ends at the first
/// row back at or above the collapsed level. Order is preserved.
pub fn visible_tasks(tasks: &[Task]) -> Vec<VisibleTask<'_>> {
    let mut visible = Vec::new();
    let mut hidden_below: Option<u32> = None;

    for (idx, task) in tasks.iter().enumerate() {
        if let Some(level) = hidden_below {
            if task.level > level {
                continue;
            }
        }
        hidden_below = None;
        visible.push(VisibleTask {
            task,
            original_index: idx,
        });
        if task.is_collapsed {
            hidden_below = Some(task.level);
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{parse_date, BusinessCalendar};

    fn row(name: &str, level: u32, collapsed: bool) -> Task {
        let cal = BusinessCalendar::default();
        let mut task = Task::new(name, parse_date("2024-01-01").unwrap(), 1, &cal);
        task.level = level;
        task.is_collapsed = collapsed;
        task
    }

    fn names<'a>(visible: &'a [VisibleTask<'a>]) -> Vec<&'a str> {
        visible.iter().map(|v| v.task.name.as_str()).collect()
    }

    #[test]
    fn test_all_visible_when_nothing_collapsed() {
        let tasks = vec![row("A", 0, false), row("B", 1, false), row("C", 2, false)];
        let visible = visible_tasks(&tasks);
        assert_eq!(names(&visible), ["A", "B", "C"]);
        assert_eq!(visible[2].original_index, 2);
    }

    #[test]
    fn test_collapse_hides_all_descendants() {
        let tasks = vec![
            row("A", 0, true),
            row("B", 1, false),
            row("C", 2, false),
            row("D", 1, false),
            row("E", 0, false),
        ];
        let visible = visible_tasks(&tasks);
        // Nested grandchild C is hidden along with B and D.
        assert_eq!(names(&visible), ["A", "E"]);
        assert_eq!(visible[1].original_index, 4);
    }

    #[test]
    fn test_expand_restores_original_order() {
        let mut tasks = vec![
            row("A", 0, true),
            row("B", 1, false),
            row("C", 2, false),
            row("D", 0, false),
        ];
        assert_eq!(names(&visible_tasks(&tasks)), ["A", "D"]);
        tasks[0].is_collapsed = false;
        assert_eq!(names(&visible_tasks(&tasks)), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_nested_collapse_inside_visible_subtree() {
        let tasks = vec![
            row("A", 0, false),
            row("B", 1, true),
            row("C", 2, false),
            row("D", 1, false),
        ];
        // B is visible but its own subtree is suppressed.
        assert_eq!(names(&visible_tasks(&tasks)), ["A", "B", "D"]);
    }

    #[test]
    fn test_sibling_at_same_level_ends_suppression() {
        let tasks = vec![row("A", 1, true), row("B", 1, false)];
        assert_eq!(names(&visible_tasks(&tasks)), ["A", "B"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(visible_tasks(&[]).is_empty());
    }
}
