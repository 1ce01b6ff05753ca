use crossterm::style::{Color, Stylize};
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use tracing::{debug, warn};

use crate::app::error::{InputError, Result};
use crate::app::settings::Settings;
use crate::app::storage::{CompleteOutcome, TaskStore};
use crate::app::{task_edit::*, task_list::*};

// Entries of the main menu, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add = 1,
    List = 2,
    Complete = 3,
    Remove = 4,
    Exit = 5,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Add,
        MenuOption::List,
        MenuOption::Complete,
        MenuOption::Remove,
        MenuOption::Exit,
    ];

    fn title(&self) -> &'static str {
        match self {
            MenuOption::Add => "Add task",
            MenuOption::List => "List tasks",
            MenuOption::Complete => "Mark task as completed",
            MenuOption::Remove => "Remove task",
            MenuOption::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuOption {
    type Error = InputError;

    fn try_from(choice: i64) -> Result<MenuOption> {
        MenuOption::ALL
            .into_iter()
            .find(|option| *option as i64 == choice)
            .ok_or_else(|| unknown_option(choice.to_string()))
    }
}

fn unknown_option(choice: String) -> InputError {
    InputError::UnknownOption {
        choice,
        max: MenuOption::ALL.len() as u8,
    }
}

// Integer parsing where integers too large for i64 are still integers (None), not malformed text
fn parse_integer(text: &str) -> std::result::Result<Option<i64>, ParseIntError> {
    match text.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

// An id typed by the user: how to echo it back, and the store id it can match, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdInput {
    pub label: String,
    pub id: Option<u32>,
}

// Run-loop state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Terminated,
}

// Kind of message, used to pick a colour
#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

pub struct App<'a, R, W> {
    pub storage: &'a mut TaskStore,
    pub settings: &'a Settings,
    pub input: R,
    pub output: W,
    pub state: AppState,
}

impl<'a, R: BufRead, W: Write> App<'a, R, W> {
    pub fn new(
        storage: &'a mut TaskStore,
        settings: &'a Settings,
        input: R,
        output: W,
    ) -> App<'a, R, W> {
        App {
            storage,
            settings,
            input,
            output,
            state: AppState::Running,
        }
    }

    fn print(&mut self, tone: Tone, message: &str) -> io::Result<()> {
        let color = match tone {
            Tone::Plain => None,
            Tone::Success => Some(Color::Green),
            Tone::Warning => Some(Color::Yellow),
            Tone::Error => Some(Color::Red),
        };

        match color {
            Some(color) if self.settings.color => writeln!(self.output, "{}", message.with(color)),
            _ => writeln!(self.output, "{message}"),
        }
    }

    // Show a prompt and read one line, without its line terminator
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_menu_option(&mut self) -> Result<MenuOption> {
        let answer = self.prompt("Choose an option: ")?;
        let text = answer.trim();
        match parse_integer(text) {
            Ok(Some(choice)) => MenuOption::try_from(choice),
            Ok(None) => Err(unknown_option(text.to_string())),
            Err(_) => Err(InputError::NotANumber(answer.clone())),
        }
    }

    // Integers that can never be an id (negative, too large) are kept and reported as not found
    fn prompt_task_id(&mut self, prompt: &str) -> Result<TaskIdInput> {
        let answer = self.prompt(prompt)?;
        let text = answer.trim();
        match parse_integer(text) {
            Ok(Some(value)) => Ok(TaskIdInput {
                label: value.to_string(),
                id: u32::try_from(value).ok(),
            }),
            Ok(None) => Ok(TaskIdInput {
                label: text.to_string(),
                id: None,
            }),
            Err(_) => Err(InputError::InvalidId(answer.clone())),
        }
    }

    fn draw_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Task Manager ---")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option as u8, option.title())?;
        }
        writeln!(self.output, "{}", "-".repeat(self.settings.menu_rule_width))
    }

    // Prompts for the fields of a new task and saves it
    fn add_task(&mut self) -> Result<()> {
        let input = TaskEditInput {
            description: self.prompt("Enter the task description: ")?,
            due_date: self.prompt("Enter the due date (YYYY-MM-DD), or leave blank: ")?,
            urgency: self.prompt("Enter the urgency (Low, Medium, High), or leave blank: ")?,
        };

        let (draft, warning) = input.validate(&self.settings.date_format);
        if let Some(warning) = warning {
            debug!(error = ?warning, "due date dropped");
            self.print(Tone::Warning, &warning.to_string())?;
        }

        let description = draft.description.clone();
        let id = draft.save(self.storage);
        self.print(
            Tone::Success,
            &format!("Task '{description}' added successfully! (ID: {id})"),
        )?;
        Ok(())
    }

    fn list_tasks(&mut self) -> Result<()> {
        let mut lines = get_list_lines(self.storage.tasks(), &self.settings.date_format);
        if !self.storage.is_empty() {
            let statistics = TaskStatistics::collect_now(self.storage.tasks());
            lines.push(get_statistics_line(&statistics));
        }

        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn complete_task(&mut self) -> Result<()> {
        let TaskIdInput { label: task_id, id } =
            self.prompt_task_id("Enter the ID of the task to mark as completed: ")?;
        let outcome = match id {
            Some(id) => self.storage.complete(id),
            None => CompleteOutcome::NotFound,
        };

        match outcome {
            CompleteOutcome::Completed => self.print(
                Tone::Success,
                &format!("Task with ID {task_id} marked as completed!"),
            )?,
            CompleteOutcome::AlreadyCompleted => self.print(
                Tone::Warning,
                &format!("Task with ID {task_id} is already completed."),
            )?,
            CompleteOutcome::NotFound => self.print(
                Tone::Error,
                &format!("Error: Task with ID {task_id} not found."),
            )?,
        }
        Ok(())
    }

    fn remove_task(&mut self) -> Result<()> {
        let TaskIdInput { label: task_id, id } =
            self.prompt_task_id("Enter the ID of the task to remove: ")?;
        let removed = id.and_then(|id| self.storage.remove(id));

        match removed {
            Some(_) => self.print(
                Tone::Success,
                &format!("Task with ID {task_id} removed successfully!"),
            )?,
            None => self.print(
                Tone::Error,
                &format!("Error: Task with ID {task_id} not found."),
            )?,
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.print(Tone::Plain, "Exiting. See you later!")?;
        self.state = AppState::Terminated;
        Ok(())
    }

    // One pass of the loop: menu, selection, dispatch
    fn step(&mut self) -> Result<()> {
        self.draw_menu()?;
        match self.prompt_menu_option()? {
            MenuOption::Add => self.add_task(),
            MenuOption::List => self.list_tasks(),
            MenuOption::Complete => self.complete_task(),
            MenuOption::Remove => self.remove_task(),
            MenuOption::Exit => self.exit(),
        }
    }
}

// Run the menu loop until the user exits or the input is closed
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> io::Result<()> {
    while app.state == AppState::Running {
        match app.step() {
            Ok(()) => {}
            Err(InputError::Eof) => {
                warn!("input closed, leaving the task manager");
                app.state = AppState::Terminated;
            }
            Err(InputError::Io(err)) => return Err(err),
            Err(err) => {
                debug!(error = ?err, "recovered from bad input");
                app.print(Tone::Error, &err.to_string())?;
            }
        }
    }
    app.output.flush()
}
