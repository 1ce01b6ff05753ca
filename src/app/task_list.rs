use chrono::{Local, NaiveDate};
use now::DateTimeNow;

use crate::app::models::Task;

const NOT_SET: &str = "Not set";
const NO_TASKS: &str = "No tasks found.";

// Counters shown under the task table
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TaskStatistics {
    pub total: usize,
    pub pending: usize,
    pub due_this_week: usize,
    pub late: usize,
}

impl TaskStatistics {
    // Late means pending and due before `today`.
    // Due this week means pending and due in [today, week_end].
    pub fn collect(tasks: &[Task], today: NaiveDate, week_end: NaiveDate) -> TaskStatistics {
        let pending = tasks.iter().filter(|task| !task.is_completed());

        TaskStatistics {
            total: tasks.len(),
            pending: pending.clone().count(),
            due_this_week: pending
                .clone()
                .filter_map(|task| task.due_date)
                .filter(|due| *due >= today && *due <= week_end)
                .count(),
            late: pending
                .filter_map(|task| task.due_date)
                .filter(|due| *due < today)
                .count(),
        }
    }

    // Same as `collect`, relative to the local calendar
    pub fn collect_now(tasks: &[Task]) -> TaskStatistics {
        let now = Local::now();
        TaskStatistics::collect(
            tasks,
            now.beginning_of_day().date_naive(),
            now.end_of_week().date_naive(),
        )
    }
}

// Build the lines of the task table, one row per task in store order
pub fn get_list_lines(tasks: &[Task], date_format: &str) -> Vec<String> {
    let mut lines = vec!["-".repeat(50)];
    if tasks.is_empty() {
        lines.push(NO_TASKS.to_string());
        return lines;
    }

    lines.push(format!(
        "{:<4} | {:<12} | {:<40} | {:<12} | {:<10}",
        "ID", "Status", "Description", "Due date", "Urgency"
    ));
    lines.push("-".repeat(105));
    lines.extend(tasks.iter().map(|task| get_row(task, date_format)));
    lines.push("-".repeat(105));
    lines
}

fn get_row(task: &Task, date_format: &str) -> String {
    let marker = if task.is_completed() { "[X]" } else { "[ ]" };
    let status = format!("{marker} {}", task.status);
    let due_date = match task.due_date {
        Some(due) => due.format(date_format).to_string(),
        None => NOT_SET.to_string(),
    };

    format!(
        "{:<4} | {:<12} | {:<40} | {:<12} | {:<10}",
        task.id, status, task.description, due_date, task.urgency.label()
    )
}

// Build the statistics footer line
pub fn get_statistics_line(statistics: &TaskStatistics) -> String {
    format!(
        "Total: {} | Pending: {} | Due this week: {} | Late: {}",
        statistics.total, statistics.pending, statistics.due_this_week, statistics.late
    )
}
