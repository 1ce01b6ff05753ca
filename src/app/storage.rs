// In-memory task store
// Philosophy of CRUD lives here; the whole session state is this one Vec.
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::app::models::{Task, TaskStatus, Urgency};

// Result of trying to mark a task as completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    Completed,
    AlreadyCompleted,
    NotFound,
}

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    // Store pre-filled with the three tasks every session starts with
    pub fn with_seed_tasks() -> TaskStore {
        let tasks = vec![
            seed_task(
                1,
                "Study Rust",
                (2025, 8, 20),
                TaskStatus::Pending,
                (2025, 8, 25),
                Urgency::High,
            ),
            seed_task(
                2,
                "Study databases",
                (2025, 8, 24),
                TaskStatus::Pending,
                (2025, 8, 25),
                Urgency::Medium,
            ),
            seed_task(
                3,
                "Study programming logic",
                (2025, 8, 22),
                TaskStatus::Completed,
                (2025, 8, 23),
                Urgency::Low,
            ),
        ];
        TaskStore { tasks }
    }

    // Id for the next insertion: current maximum + 1, so ids freed at the top get reused
    fn next_id(&self) -> u32 {
        self.tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1)
    }

    // CREATE
    pub fn add(
        &mut self,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        urgency: Option<Urgency>,
    ) -> &Task {
        self.add_created_on(Local::now().date_naive(), description, due_date, urgency)
    }

    pub fn add_created_on(
        &mut self,
        created_on: NaiveDate,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        urgency: Option<Urgency>,
    ) -> &Task {
        let task = Task {
            id: self.next_id(),
            description: description.into(),
            created_on,
            status: TaskStatus::Pending,
            due_date,
            urgency: urgency.unwrap_or_default(),
        };
        debug!(id = task.id, urgency = %task.urgency, "adding task");

        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    // READ
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // UPDATE
    pub fn complete(&mut self, task_id: u32) -> CompleteOutcome {
        let outcome = match self.tasks.iter_mut().find(|task| task.id == task_id) {
            None => CompleteOutcome::NotFound,
            Some(task) if task.is_completed() => CompleteOutcome::AlreadyCompleted,
            Some(task) => {
                task.status = TaskStatus::Completed;
                CompleteOutcome::Completed
            }
        };
        debug!(id = task_id, ?outcome, "complete task");
        outcome
    }

    // DELETE
    pub fn remove(&mut self, task_id: u32) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == task_id)?;
        debug!(id = task_id, "removing task");
        Some(self.tasks.remove(index))
    }
}

fn seed_task(
    id: u32,
    description: &str,
    created_on: (i32, u32, u32),
    status: TaskStatus,
    due_date: (i32, u32, u32),
    urgency: Urgency,
) -> Task {
    Task {
        id,
        description: description.to_string(),
        created_on: ymd(created_on),
        status,
        due_date: Some(ymd(due_date)),
        urgency,
    }
}

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;

    fn status_of(store: &TaskStore, task_id: u32) -> Option<TaskStatus> {
        store.tasks().iter().find(|task| task.id == task_id).map(|task| task.status)
    }

    fn ids(store: &TaskStore) -> Vec<u32> {
        store.tasks().iter().map(|task| task.id).collect()
    }

    #[test]
    fn add_on_empty_store_uses_defaults() {
        let mut store = TaskStore::default();
        let task = store.add("Buy milk", None, None).clone();

        assert_eq!(task.id, 1);
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.urgency, Urgency::Low);
        assert_eq!(task.due_date, None);
        assert_eq!(task.created_on, Local::now().date_naive());
    }

    #[test]
    fn add_accepts_empty_description_and_past_due_date() {
        let mut store = TaskStore::default();
        let created_on = ymd((2025, 9, 10));
        let due = ymd((2020, 1, 1));
        let task = store.add_created_on(created_on, "", Some(due), Some(Urgency::High));

        assert_eq!(task.description, "");
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.urgency, Urgency::High);
    }

    #[test]
    fn ids_are_max_plus_one() {
        let mut store = TaskStore::default();
        for expected in 1..=4 {
            let before = store.tasks().iter().map(|task| task.id).max().unwrap_or(0);
            let id = store.add(format!("Task {expected}"), None, None).id;
            assert_eq!(id, before + 1);
        }
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);

        // Removing from the middle does not affect the next id
        store.remove(2);
        assert_eq!(store.add("Task 5", None, None).id, 5);
        assert_eq!(ids(&store), vec![1, 3, 4, 5]);
    }

    #[test]
    fn removing_highest_id_reuses_it() {
        let mut store = TaskStore::with_seed_tasks();
        assert_eq!(ids(&store), vec![1, 2, 3]);

        assert!(store.remove(3).is_some());
        let task = store.add("New task", None, None);
        assert_eq!(task.id, 3);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn complete_flips_status_once() {
        let mut store = TaskStore::with_seed_tasks();

        assert_eq!(store.complete(1), CompleteOutcome::Completed);
        assert_eq!(status_of(&store, 1), Some(TaskStatus::Completed));

        assert_eq!(store.complete(1), CompleteOutcome::AlreadyCompleted);
        assert_eq!(status_of(&store, 1), Some(TaskStatus::Completed));
    }

    #[test]
    fn complete_reports_seeded_completed_task() {
        let mut store = TaskStore::with_seed_tasks();
        assert_eq!(store.complete(3), CompleteOutcome::AlreadyCompleted);
    }

    #[test]
    fn complete_missing_id_is_not_found() {
        let mut store = TaskStore::with_seed_tasks();
        assert_eq!(store.complete(999), CompleteOutcome::NotFound);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut store = TaskStore::with_seed_tasks();
        store.add("Fourth", None, None);

        let removed = store.remove(2).map(|task| task.description);
        assert_eq!(removed.as_deref(), Some("Study databases"));
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn remove_missing_id_leaves_store_unchanged() {
        let mut store = TaskStore::with_seed_tasks();
        assert_eq!(store.remove(42), None);
        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn seed_tasks_match_session_start() {
        let store = TaskStore::with_seed_tasks();
        let first = &store.tasks()[0];

        assert_eq!(first.description, "Study Rust");
        assert_eq!(first.created_on, ymd((2025, 8, 20)));
        assert_eq!(first.due_date, Some(ymd((2025, 8, 25))));
        assert_eq!(first.urgency, Urgency::High);
        assert!(store.tasks()[2].is_completed());
        assert!(!store.is_empty());

        // Every seed date is a real calendar date
        for task in store.tasks() {
            assert_eq!(task.created_on.year(), 2025);
            assert!(task.due_date.is_some_and(|due| due.year() == 2025));
        }
    }
}
