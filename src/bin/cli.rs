use std::io;
use std::process::ExitCode;
use timetable_tool::{DocumentStore, JsonFileStore, run_menu};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let store = JsonFileStore::default();
    let result = store.load_document().and_then(|mut document| {
        println!(
            "Timetable Tool - data file: {} ({} tasks scheduled)",
            store.path().display(),
            document.task_count()
        );
        run_menu(&mut document, &store, io::stdin().lock(), io::stdout().lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
