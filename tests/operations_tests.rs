use std::fs;
use tempfile::TempDir;
use timetable_tool::{
    DocumentStore, JsonFileStore, Outcome, add_task, create_category, edit_task, mark_complete,
    remove_task, view_timetable,
};

fn setup() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("data.json"));
    (dir, store)
}

#[test]
fn tasks_are_listed_in_the_order_added() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    for task in ["Read ch. 1", "HW1", "Quiz", "HW1"] {
        add_task(&mut doc, &store, "Monday", "Math", task).unwrap();
    }
    add_task(&mut doc, &store, "Monday", "Art", "Sketch").unwrap();

    let view = view_timetable(&doc);
    let expected = "Monday:\n  Math:\n    1. [ ] Read ch. 1\n    2. [ ] HW1\n    3. [ ] Quiz\n    4. [ ] HW1\n  Art:\n    1. [ ] Sketch\n";
    assert_eq!(view, expected);
}

#[test]
fn completion_applies_to_tasks_added_later_on_any_day() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    mark_complete(&mut doc, &store, "Math", "HW1").unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "HW1").unwrap();
    add_task(&mut doc, &store, "Thursday", "Math", "HW1").unwrap();

    let view = view_timetable(&doc);
    assert_eq!(view.matches("1. [✓] HW1").count(), 2);
}

#[test]
fn removing_a_duplicate_removes_only_the_first() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "A").unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "A").unwrap();

    let outcome = remove_task(&mut doc, &store, "Monday", "Math", "A").unwrap();
    assert_eq!(outcome, Outcome::TaskRemoved { task: "A".into() });
    assert_eq!(doc.tasks("Monday", "Math").unwrap(), ["A"]);
    assert_eq!(store.load_document().unwrap(), doc);
}

#[test]
fn removed_task_completion_lingers() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "HW1").unwrap();
    mark_complete(&mut doc, &store, "Math", "HW1").unwrap();
    remove_task(&mut doc, &store, "Monday", "Math", "HW1").unwrap();
    assert_eq!(doc.progress["Math"], vec!["HW1".to_string()]);

    add_task(&mut doc, &store, "Friday", "Math", "HW1").unwrap();
    assert!(view_timetable(&doc).contains("1. [✓] HW1"));
}

#[test]
fn renaming_a_completed_task_makes_it_incomplete() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "Intro").unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "HW1").unwrap();
    mark_complete(&mut doc, &store, "Math", "HW1").unwrap();
    assert!(view_timetable(&doc).contains("2. [✓] HW1"));

    let outcome = edit_task(&mut doc, &store, "Monday", "Math", "HW1", "HW1 (final)").unwrap();
    assert_eq!(
        outcome,
        Outcome::TaskEdited {
            old: "HW1".into(),
            new: "HW1 (final)".into()
        }
    );
    let view = view_timetable(&doc);
    assert!(view.contains("2. [ ] HW1 (final)"), "{view}");
    assert_eq!(doc.progress["Math"], vec!["HW1".to_string()]);
}

#[test]
fn end_to_end_category_task_completion() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    create_category(&mut doc, &store, "Math").unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "HW1").unwrap();
    mark_complete(&mut doc, &store, "Math", "HW1").unwrap();

    let reloaded = store.load_document().unwrap();
    assert_eq!(reloaded.categories, vec!["Math".to_string()]);
    assert!(view_timetable(&reloaded).contains("Monday:\n  Math:\n    1. [✓] HW1\n"));
}

#[test]
fn missing_task_leaves_file_untouched() {
    let (_dir, store) = setup();
    let mut doc = store.load_document().unwrap();
    add_task(&mut doc, &store, "Monday", "Math", "HW1").unwrap();
    let before = fs::read(store.path()).unwrap();

    for (day, module, task) in [
        ("Monday", "Math", "HW2"),
        ("Monday", "Physics", "HW1"),
        ("Sunday", "Math", "HW1"),
    ] {
        assert_eq!(
            remove_task(&mut doc, &store, day, module, task).unwrap(),
            Outcome::NotFound
        );
        assert_eq!(
            edit_task(&mut doc, &store, day, module, task, "X").unwrap(),
            Outcome::NotFound
        );
    }
    assert_eq!(Outcome::NotFound.to_string(), "Task not found.");
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn empty_timetable_view() {
    let (_dir, store) = setup();
    let doc = store.load_document().unwrap();
    assert_eq!(view_timetable(&doc), "No tasks scheduled.\n");
}
