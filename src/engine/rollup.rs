use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::model::Task;

/// Whether the task at `idx` is a summary row, i.e. the next task sits
/// one or more levels deeper.
pub fn is_parent(tasks: &[Task], idx: usize) -> bool {
    match tasks.get(idx + 1) {
        Some(next) => next.level > tasks[idx].level,
        None => false,
    }
}

/// Derive every parent's span and progress from its children.
///
/// Returns a list of the same length and order with each summary row's
/// `start`/`end`/`duration`/`progress` overwritten: start is the minimum
/// child start, end the maximum child end, duration the inclusive
/// business-day span, and progress the rounded mean of child progress.
///
/// The pass runs right to left. Only immediate children (level + 1) are
/// read, and in decreasing index order every deeper row has already been
/// finalized by the time an ancestor scans it, so grandchildren values
/// propagate upward in a single pass. A left-to-right pass would read
/// stale spans for nested parents.
pub fn rollup(tasks: &[Task], calendar: &BusinessCalendar) -> Vec<Task> {
    let mut rolled = tasks.to_vec();

    for i in (0..rolled.len()).rev() {
        let parent_level = rolled[i].level;

        let mut min_start: Option<NaiveDate> = None;
        let mut max_end: Option<NaiveDate> = None;
        let mut progress_sum: u32 = 0;
        let mut child_count: u32 = 0;

        for child in rolled.iter().skip(i + 1) {
            if child.level <= parent_level {
                break;
            }
            // Rows deeper than level + 1 belong to nested parents and
            // are already folded into them.
            if child.level == parent_level + 1 {
                min_start = Some(min_start.map_or(child.start, |s| s.min(child.start)));
                max_end = Some(max_end.map_or(child.end, |e| e.max(child.end)));
                progress_sum += u32::from(child.progress);
                child_count += 1;
            }
        }

        if child_count > 0 {
            let start = min_start.unwrap();
            let end = max_end.unwrap();
            let task = &mut rolled[i];
            task.start = start;
            task.end = end;
            task.duration = calendar.diff_days(start, end, true);
            task.progress =
                ((progress_sum as f64 / child_count as f64).round() as u32).min(100) as u8;
        }
    }

    rolled
}
