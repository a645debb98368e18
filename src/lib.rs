pub mod document;
pub mod menu;
pub mod operations;
pub mod persistence;

pub use document::{DaySchedule, TimetableDocument};
pub use menu::{MenuChoice, run_menu};
pub use operations::{
    Outcome, add_task, create_category, edit_task, mark_complete, remove_task, view_timetable,
};
pub use persistence::{
    DEFAULT_DATA_FILE, DocumentStore, JsonFileStore, PersistenceError, PersistenceResult,
    export_timetable_to_csv,
};
