pub mod error;
pub mod models;
pub mod settings;
pub mod storage;
pub mod task_edit;
pub mod task_list;
pub mod ui;
