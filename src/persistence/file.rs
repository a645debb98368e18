use super::{DocumentStore, PersistenceResult};
use crate::TimetableDocument;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_DATA_FILE: &str = "data.json";

const BACKUP_SUFFIX: &str = ".bak";

/// Stores the document as pretty-printed JSON in a single file.
///
/// Writes overwrite the file directly: there is no temp-file rename, no fsync
/// and no lock, so concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path that receives a corrupt file, e.g. `data.json.bak`.
    pub fn backup_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    fn initialize(&self) -> PersistenceResult<TimetableDocument> {
        let document = TimetableDocument::new();
        self.save_document(&document)?;
        info!(path = %self.path.display(), "created new timetable file");
        Ok(document)
    }

    fn recover_corrupt(&self, err: serde_json::Error) -> TimetableDocument {
        let backup = self.backup_path();
        warn!(
            path = %self.path.display(),
            error = %err,
            "timetable file is corrupt, starting from an empty document"
        );
        if let Err(rename_err) = fs::rename(&self.path, &backup) {
            warn!(
                backup = %backup.display(),
                error = %rename_err,
                "could not back up corrupt timetable file"
            );
        }
        TimetableDocument::new()
    }
}

impl DocumentStore for JsonFileStore {
    fn load_document(&self) -> PersistenceResult<TimetableDocument> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return self.initialize(),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_slice::<TimetableDocument>(&bytes) {
            Ok(document) => Ok(document),
            Err(err) => Ok(self.recover_corrupt(err)),
        }
    }

    fn save_document(&self, document: &TimetableDocument) -> PersistenceResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, document)?;
        debug!(path = %self.path.display(), "timetable saved");
        Ok(())
    }
}

#[derive(Serialize)]
struct TaskCsvRecord<'a> {
    day: &'a str,
    module: &'a str,
    position: usize,
    task: &'a str,
    completed: bool,
}

/// Writes one row per scheduled task, in the same order the timetable view uses.
pub fn export_timetable_to_csv<P: AsRef<Path>>(
    document: &TimetableDocument,
    path: P,
) -> PersistenceResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (day, modules) in &document.timetable {
        for (module, tasks) in modules {
            for (idx, task) in tasks.iter().enumerate() {
                writer.serialize(TaskCsvRecord {
                    day,
                    module,
                    position: idx + 1,
                    task,
                    completed: document.is_complete(module, task),
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
