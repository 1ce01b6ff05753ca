use std::{env, error::Error, io};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod app;

// Start the app: seed the store, then hand it to the menu loop until the user exits.
pub fn main() -> Result<(), Box<dyn Error>> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let settings = app::settings::Settings::detect();
    let mut storage = app::storage::TaskStore::with_seed_tasks();
    info!(tasks = storage.len(), color = settings.color, "task store seeded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = app::ui::App::new(&mut storage, &settings, stdin.lock(), stdout.lock());
    let res = app::ui::run_app(&mut app);

    if let Err(err) = res {
        error!(%err, "task manager stopped");
        return Err(err.into());
    }

    Ok(())
}

// WARN unless the directives say otherwise
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}
