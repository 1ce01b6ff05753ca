use derivative::Derivative;
use std::io::{self, IsTerminal};

// Runtime configuration of the console front-end
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct Settings {
    // Style messages with terminal colours
    pub color: bool,
    // chrono format used both to parse and to print due dates
    #[derivative(Default(value = "\"%Y-%m-%d\".to_string()"))]
    pub date_format: String,
    // Width of the dashed rule closing the menu
    #[derivative(Default(value = "37"))]
    pub menu_rule_width: usize,
}

impl Settings {
    // Defaults, with colours only when stdout is an interactive terminal
    pub fn detect() -> Settings {
        Settings {
            color: io::stdout().is_terminal(),
            ..Settings::default()
        }
    }
}
