use clap::Parser;
use donut::cli::commands::Cli;
use donut::io::Store;
use donut::io::config_io::resolve_donut_dir;
use donut::io::logging::init_file_logging;

fn main() {
    let _cli = Cli::parse();
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_file_logging();

    if let Err(e) = launch() {
        tracing::error!(error = %e, "startup failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn launch() -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_donut_dir()?;
    let store = Store::open(dir)?;
    donut::tui::run(store)
}
