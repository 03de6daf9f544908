use std::sync::{Arc, Mutex};
use todobar_core::{ListChange, TaskId, TaskListStore};
use uuid::Uuid;

fn store_with_titles(titles: &[&str]) -> TaskListStore {
    let mut store = TaskListStore::new();
    for title in titles {
        store.add_task(*title);
    }
    store
}

fn titles(store: &TaskListStore) -> Vec<String> {
    store.tasks().iter().map(|task| task.title.clone()).collect()
}

fn absent_id() -> TaskId {
    Uuid::parse_str("00000000-0000-4000-8000-00000000beef").unwrap()
}

fn record_changes(store: &mut TaskListStore) -> Arc<Mutex<Vec<ListChange>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    store.subscribe(Box::new(move |change| {
        sink.lock().unwrap().push(change);
    }));
    changes
}

#[test]
fn add_prepends_newest_first() {
    let store = store_with_titles(&["T1", "T2", "T3"]);
    assert_eq!(titles(&store), vec!["T3", "T2", "T1"]);
}

#[test]
fn blank_titles_are_rejected_without_mutation() {
    let mut store = store_with_titles(&["Existing"]);
    let snapshot = store.tasks().to_vec();

    store.add_task("");
    store.add_task("   ");
    store.add_task("\t\n");

    assert_eq!(store.tasks(), snapshot.as_slice());
    assert_eq!(store.len(), 1);
}

#[test]
fn accepted_titles_keep_their_whitespace() {
    let mut store = TaskListStore::new();
    store.add_task("  padded  ");
    assert_eq!(store.tasks()[0].title, "  padded  ");
}

#[test]
fn toggle_round_trip_preserves_identity_fields() {
    let mut store = store_with_titles(&["Walk the dog"]);
    let original = store.tasks()[0].clone();

    store.toggle_completion(original.id);
    assert!(store.tasks()[0].is_completed);

    store.toggle_completion(original.id);
    assert_eq!(store.tasks()[0], original);
}

#[test]
fn toggle_unknown_id_is_a_silent_noop() {
    let mut store = store_with_titles(&["Only task"]);
    let snapshot = store.tasks().to_vec();

    store.toggle_completion(absent_id());

    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn delete_middle_task_preserves_order() {
    let mut store = store_with_titles(&["A", "B", "C"]);
    // Display order is newest first: [C, B, A].
    let middle_id = store.tasks()[1].id;

    store.delete_task(middle_id);

    assert_eq!(titles(&store), vec!["C", "A"]);
}

#[test]
fn delete_unknown_id_leaves_list_unchanged() {
    let mut store = store_with_titles(&["A", "B"]);
    let snapshot = store.tasks().to_vec();

    store.delete_task(absent_id());

    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut store = store_with_titles(&["Repeated"]);
    let first_id = store.tasks()[0].id;

    store.delete_task(first_id);
    store.add_task("Repeated");

    assert_ne!(store.tasks()[0].id, first_id);
}

#[test]
fn clear_completed_removes_only_completed_rows() {
    let mut store = store_with_titles(&["A", "B", "C"]);
    // Display order [C, B, A]; complete C and A, keep B open.
    let c_id = store.tasks()[0].id;
    let a_id = store.tasks()[2].id;
    store.toggle_completion(c_id);
    store.toggle_completion(a_id);
    let b_before = store.tasks()[1].clone();

    store.clear_completed();

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0], b_before);
}

#[test]
fn clear_completed_with_no_completed_rows_is_a_noop() {
    let mut store = store_with_titles(&["A", "B"]);
    let snapshot = store.tasks().to_vec();

    store.clear_completed();

    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn clear_all_empties_any_list() {
    let mut store = store_with_titles(&["A", "B", "C"]);
    assert!(!store.is_empty());

    store.clear_all();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.tasks().is_empty());
}

#[test]
fn is_empty_tracks_list_content() {
    let mut store = TaskListStore::new();
    assert!(store.is_empty());

    store.add_task("One");
    assert!(!store.is_empty());

    store.clear_all();
    assert!(store.is_empty());
}

#[test]
fn task_lookup_finds_live_ids_only() {
    let store = store_with_titles(&["Findable"]);
    let id = store.tasks()[0].id;

    assert!(store.task(id).is_some());
    assert!(store.task(absent_id()).is_none());
}

#[test]
fn effective_mutations_notify_observers_in_order() {
    let mut store = TaskListStore::new();
    let changes = record_changes(&mut store);

    store.add_task("First");
    let id = store.tasks()[0].id;
    store.toggle_completion(id);
    store.clear_completed();

    let observed = changes.lock().unwrap().clone();
    assert_eq!(
        observed,
        vec![
            ListChange::TaskAdded(id),
            ListChange::TaskToggled(id),
            ListChange::CompletedCleared { removed: 1 },
        ]
    );
}

#[test]
fn delete_and_clear_all_notify_with_metadata() {
    let mut store = store_with_titles(&["A", "B", "C"]);
    let changes = record_changes(&mut store);
    let newest_id = store.tasks()[0].id;

    store.delete_task(newest_id);
    store.clear_all();

    let observed = changes.lock().unwrap().clone();
    assert_eq!(
        observed,
        vec![
            ListChange::TaskDeleted(newest_id),
            ListChange::AllCleared { removed: 2 },
        ]
    );
}

#[test]
fn noop_paths_never_notify() {
    let mut store = TaskListStore::new();
    let changes = record_changes(&mut store);

    store.add_task("   ");
    store.toggle_completion(absent_id());
    store.delete_task(absent_id());
    store.clear_completed();
    store.clear_all();

    assert!(changes.lock().unwrap().is_empty());
}
