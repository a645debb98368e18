//! User-facing operations. Each one mutates the document and, when something
//! changed, saves it straight away through the store.

use crate::TimetableDocument;
use crate::persistence::{DocumentStore, PersistenceResult};
use std::fmt;
use tracing::debug;

pub const COMPLETE_MARKER: &str = "[✓]";
pub const INCOMPLETE_MARKER: &str = "[ ]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    CategoryCreated { name: String },
    TaskAdded { day: String, module: String, task: String },
    TaskCompleted { module: String, task: String },
    TaskRemoved { task: String },
    TaskEdited { old: String, new: String },
    NotFound,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CategoryCreated { name } => write!(f, "Category '{name}' created."),
            Outcome::TaskAdded { day, module, task } => {
                write!(f, "Task '{task}' added to {module} on {day}.")
            }
            Outcome::TaskCompleted { module, task } => {
                write!(f, "Task '{task}' in {module} marked as complete.")
            }
            Outcome::TaskRemoved { task } => write!(f, "Task '{task}' removed."),
            Outcome::TaskEdited { old, new } => write!(f, "Task '{old}' updated to '{new}'."),
            Outcome::NotFound => write!(f, "Task not found."),
        }
    }
}

pub fn create_category(
    doc: &mut TimetableDocument,
    store: &impl DocumentStore,
    name: &str,
) -> PersistenceResult<Outcome> {
    doc.push_category(name);
    store.save_document(doc)?;
    Ok(Outcome::CategoryCreated {
        name: name.to_string(),
    })
}

pub fn add_task(
    doc: &mut TimetableDocument,
    store: &impl DocumentStore,
    day: &str,
    module: &str,
    task: &str,
) -> PersistenceResult<Outcome> {
    doc.push_task(day, module, task);
    store.save_document(doc)?;
    Ok(Outcome::TaskAdded {
        day: day.to_string(),
        module: module.to_string(),
        task: task.to_string(),
    })
}

/// Records `task` as done for `module`. The task does not need to be
/// scheduled; a same-named task added later will show as complete.
pub fn mark_complete(
    doc: &mut TimetableDocument,
    store: &impl DocumentStore,
    module: &str,
    task: &str,
) -> PersistenceResult<Outcome> {
    doc.push_completed(module, task);
    store.save_document(doc)?;
    Ok(Outcome::TaskCompleted {
        module: module.to_string(),
        task: task.to_string(),
    })
}

/// Removes the first occurrence only. Completion entries for the task stay
/// in `progress`.
pub fn remove_task(
    doc: &mut TimetableDocument,
    store: &impl DocumentStore,
    day: &str,
    module: &str,
    task: &str,
) -> PersistenceResult<Outcome> {
    if !doc.take_task(day, module, task) {
        debug!(day, module, task, "remove: task not found");
        return Ok(Outcome::NotFound);
    }
    store.save_document(doc)?;
    Ok(Outcome::TaskRemoved {
        task: task.to_string(),
    })
}

/// Renames a task in place. `progress` still holds the old text, so a
/// completed task reads as incomplete after the rename.
pub fn edit_task(
    doc: &mut TimetableDocument,
    store: &impl DocumentStore,
    day: &str,
    module: &str,
    old_task: &str,
    new_task: &str,
) -> PersistenceResult<Outcome> {
    if !doc.rename_task(day, module, old_task, new_task) {
        debug!(day, module, task = old_task, "edit: task not found");
        return Ok(Outcome::NotFound);
    }
    store.save_document(doc)?;
    Ok(Outcome::TaskEdited {
        old: old_task.to_string(),
        new: new_task.to_string(),
    })
}

pub fn view_timetable(doc: &TimetableDocument) -> String {
    if doc.timetable.is_empty() {
        return "No tasks scheduled.\n".to_string();
    }
    let mut out = String::new();
    for (day, modules) in &doc.timetable {
        out.push_str(&format!("{day}:\n"));
        for (module, tasks) in modules {
            out.push_str(&format!("  {module}:\n"));
            for (idx, task) in tasks.iter().enumerate() {
                let marker = if doc.is_complete(module, task) {
                    COMPLETE_MARKER
                } else {
                    INCOMPLETE_MARKER
                };
                out.push_str(&format!("    {}. {marker} {task}\n", idx + 1));
            }
        }
    }
    out
}
