use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tasks scheduled for one day, grouped by module.
pub type DaySchedule = IndexMap<String, Vec<String>>;

/// The whole persisted state.
///
/// Maps keep insertion order so days and modules render in the order they
/// were first added. Completion is tracked by exact task text per module,
/// independently of the day a task is scheduled on. Unrecognised top-level
/// keys are carried in `extra` so a load/save cycle keeps them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableDocument {
    #[serde(default)]
    pub timetable: IndexMap<String, DaySchedule>,
    #[serde(default)]
    pub progress: IndexMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimetableDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, day: &str, module: &str) -> Option<&[String]> {
        self.timetable
            .get(day)
            .and_then(|modules| modules.get(module))
            .map(Vec::as_slice)
    }

    pub fn is_complete(&self, module: &str, task: &str) -> bool {
        self.progress
            .get(module)
            .is_some_and(|done| done.iter().any(|t| t == task))
    }

    pub fn task_count(&self) -> usize {
        self.timetable
            .values()
            .flat_map(|modules| modules.values())
            .map(Vec::len)
            .sum()
    }

    pub fn push_category(&mut self, name: impl Into<String>) {
        self.categories.push(name.into());
    }

    pub fn push_task(&mut self, day: &str, module: &str, task: impl Into<String>) {
        self.timetable
            .entry(day.to_string())
            .or_default()
            .entry(module.to_string())
            .or_default()
            .push(task.into());
    }

    pub fn push_completed(&mut self, module: &str, task: impl Into<String>) {
        self.progress
            .entry(module.to_string())
            .or_default()
            .push(task.into());
    }

    /// Removes the first occurrence of `task`. Returns false when the day,
    /// module or task is absent, in which case nothing changes.
    pub fn take_task(&mut self, day: &str, module: &str, task: &str) -> bool {
        let Some(list) = self.task_list_mut(day, module) else {
            return false;
        };
        match list.iter().position(|t| t == task) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Renames the first occurrence of `old` in place. Progress is untouched.
    pub fn rename_task(&mut self, day: &str, module: &str, old: &str, new: &str) -> bool {
        let Some(list) = self.task_list_mut(day, module) else {
            return false;
        };
        match list.iter_mut().find(|t| t.as_str() == old) {
            Some(slot) => {
                *slot = new.to_string();
                true
            }
            None => false,
        }
    }

    fn task_list_mut(&mut self, day: &str, module: &str) -> Option<&mut Vec<String>> {
        self.timetable
            .get_mut(day)
            .and_then(|modules| modules.get_mut(module))
    }
}
