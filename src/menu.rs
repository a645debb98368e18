use crate::TimetableDocument;
use crate::operations::{
    self, add_task, create_category, edit_task, mark_complete, remove_task, view_timetable,
};
use crate::persistence::{DocumentStore, PersistenceResult};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateCategory,
    AddTask,
    MarkComplete,
    ViewTimetable,
    RemoveTask,
    EditTask,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateCategory,
        MenuChoice::AddTask,
        MenuChoice::MarkComplete,
        MenuChoice::ViewTimetable,
        MenuChoice::RemoveTask,
        MenuChoice::EditTask,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateCategory => "Create Category",
            MenuChoice::AddTask => "Add Task",
            MenuChoice::MarkComplete => "Mark Task Complete",
            MenuChoice::ViewTimetable => "View Timetable",
            MenuChoice::RemoveTask => "Remove Task",
            MenuChoice::EditTask => "Edit Task",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoiceError {
    NotANumber,
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = MenuChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s.trim().parse().map_err(|_| MenuChoiceError::NotANumber)?;
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(MenuChoiceError::OutOfRange(n))
    }
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Timetable Menu")?;
    for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", idx + 1, choice.label())?;
    }
    Ok(())
}

/// Prints `label` and reads one trimmed line. `None` means input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads several answers in a row, giving up as soon as input runs out.
fn prompt_all<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    output: &mut W,
    labels: [&str; N],
) -> io::Result<Option<[String; N]>> {
    let mut answers: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, label) in answers.iter_mut().zip(labels) {
        match prompt(input, output, label)? {
            Some(answer) => *slot = answer,
            None => return Ok(None),
        }
    }
    Ok(Some(answers))
}

/// Runs the read-dispatch-persist loop until the user picks Exit or input
/// ends. Save failures abort the loop and are returned to the caller.
pub fn run_menu<R, W, S>(
    doc: &mut TimetableDocument,
    store: &S,
    mut input: R,
    mut output: W,
) -> PersistenceResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentStore,
{
    loop {
        print_menu(&mut output)?;
        let Some(raw) = prompt(&mut input, &mut output, "Choose an option: ")? else {
            break;
        };
        let choice = match raw.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(MenuChoiceError::NotANumber) => {
                writeln!(output, "Invalid input. Please enter a number.")?;
                continue;
            }
            Err(MenuChoiceError::OutOfRange(_)) => {
                writeln!(
                    output,
                    "Invalid choice. Please select 1-{}.",
                    MenuChoice::ALL.len()
                )?;
                continue;
            }
        };

        let outcome: Option<operations::Outcome> = match choice {
            MenuChoice::CreateCategory => {
                let Some([name]) = prompt_all(&mut input, &mut output, ["Category name: "])?
                else {
                    break;
                };
                Some(create_category(doc, store, &name)?)
            }
            MenuChoice::AddTask => {
                let Some([day, module, task]) = prompt_all(
                    &mut input,
                    &mut output,
                    ["Day: ", "Module: ", "Task description: "],
                )?
                else {
                    break;
                };
                Some(add_task(doc, store, &day, &module, &task)?)
            }
            MenuChoice::MarkComplete => {
                let Some([module, task]) = prompt_all(
                    &mut input,
                    &mut output,
                    ["Module: ", "Task description: "],
                )?
                else {
                    break;
                };
                Some(mark_complete(doc, store, &module, &task)?)
            }
            MenuChoice::ViewTimetable => {
                write!(output, "{}", view_timetable(doc))?;
                None
            }
            MenuChoice::RemoveTask => {
                let Some([day, module, task]) = prompt_all(
                    &mut input,
                    &mut output,
                    ["Day: ", "Module: ", "Task to remove: "],
                )?
                else {
                    break;
                };
                Some(remove_task(doc, store, &day, &module, &task)?)
            }
            MenuChoice::EditTask => {
                let Some([day, module, old_task, new_task]) = prompt_all(
                    &mut input,
                    &mut output,
                    ["Day: ", "Module: ", "Task to edit: ", "New description: "],
                )?
                else {
                    break;
                };
                Some(edit_task(doc, store, &day, &module, &old_task, &new_task)?)
            }
            MenuChoice::Exit => {
                writeln!(output, "Goodbye!")?;
                break;
            }
        };

        if let Some(outcome) = outcome {
            writeln!(output, "{outcome}")?;
        }
    }
    output.flush()?;
    Ok(())
}
