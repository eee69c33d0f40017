use daylist_core::grouping;
use daylist_core::storage::{FileStorage, MemoryStorage, TodoStorage, encode_todos};
use daylist_core::store::{FilterKey, GroupMode, TodoStore};
use daylist_core::todo::{Tag, Todo};
use tempfile::tempdir;

fn date(raw: &str) -> chrono::NaiveDate {
    raw.parse().expect("valid date literal")
}

#[test]
fn add_scenario_makes_the_new_item_visible() {
    let mut store = TodoStore::open(MemoryStorage::new());
    store.add("Buy milk", date("2024-05-01"), vec![Tag::Food]);

    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.mode(), GroupMode::Date);
    assert_eq!(store.selection(), Some(FilterKey::Date(date("2024-05-01"))));

    let visible = store.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "Buy milk");
    assert_eq!(visible[0].tags, vec![Tag::Food]);
    assert!(!visible[0].completed);
}

#[test]
fn startup_selects_the_latest_persisted_date() {
    let todos = vec![
        Todo::new(1, "first".to_string(), date("2024-05-01"), vec![]),
        Todo::new(2, "third".to_string(), date("2024-05-03"), vec![]),
    ];
    let payload = encode_todos(&todos).expect("encode");

    let store = TodoStore::open(MemoryStorage::with_payload(&payload));
    assert_eq!(store.mode(), GroupMode::Date);
    assert_eq!(store.selection(), Some(FilterKey::Date(date("2024-05-03"))));
    assert_eq!(store.visible().len(), 1);
    assert_eq!(store.visible()[0].text, "third");
}

#[test]
fn file_backed_store_survives_a_restart() {
    let temp = tempdir().expect("tempdir");
    let storage = FileStorage::new(temp.path().join("todos.json"));

    let mut store = TodoStore::open(storage.clone());
    let kept = store
        .add("Buy winter coat", date("2024-05-01"), vec![Tag::Clothing])
        .expect("added");
    let dropped = store
        .add("Return library book", date("2024-05-02"), vec![])
        .expect("added");
    store.toggle_completed(kept);
    store.delete(dropped);

    let reopened = TodoStore::open(storage);
    assert_eq!(reopened.todos().len(), 1);
    assert_eq!(reopened.todos()[0].id, kept);
    assert_eq!(reopened.todos()[0].text, "Buy winter coat");
    assert!(reopened.todos()[0].completed);
    assert_eq!(reopened.selection(), Some(FilterKey::Date(date("2024-05-01"))));
}

#[test]
fn corrupt_file_recovers_to_an_empty_store_with_notice() {
    let temp = tempdir().expect("tempdir");
    let storage = FileStorage::new(temp.path().join("todos.json"));
    storage.save("{\"definitely\": \"not a todo list\"").expect("seed");

    let store = TodoStore::open(storage);
    assert!(store.todos().is_empty());
    assert!(store.selection().is_none());
    assert!(store.load_notice().is_some());
}

#[test]
fn groupings_cover_the_whole_collection_on_every_read() {
    let mut store = TodoStore::open(MemoryStorage::new());
    store.add("Buy milk", date("2024-05-01"), vec![Tag::Food]);
    store.add("Fix bike", date("2024-05-01"), vec![Tag::Transport]);
    store.add("No category", date("2024-04-30"), vec![]);

    let dates: Vec<String> = grouping::by_date(store.todos())
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-04-30"]);

    let tag_counts: Vec<usize> = grouping::by_tag(store.todos())
        .into_iter()
        .map(|(_, members)| members.len())
        .collect();
    // clothing, food, housing, transport, other
    assert_eq!(tag_counts, vec![0, 1, 0, 1, 1]);
}
