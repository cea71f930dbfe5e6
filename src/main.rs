use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod search;
mod ui;

use app::App;

fn main() -> Result<()> {
    // Log to stderr so diagnostics don't fight the TUI over stdout.
    // Redirect with `proman 2>proman.log` to capture the stubbed
    // persistence calls.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Initialize terminal with panic hook
    let mut terminal = ratatui::init();

    // Run application
    let result = App::new().run(&mut terminal);

    // Restore terminal
    ratatui::restore();

    result
}
