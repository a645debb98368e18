use crate::TimetableDocument;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Backing storage for the timetable document.
///
/// `load_document` never fails because stored data is missing or unreadable
/// as a document; implementations hand back an empty document instead.
pub trait DocumentStore {
    fn load_document(&self) -> PersistenceResult<TimetableDocument>;
    fn save_document(&self, document: &TimetableDocument) -> PersistenceResult<()>;
}

pub mod file;

pub use file::{DEFAULT_DATA_FILE, JsonFileStore, export_timetable_to_csv};
