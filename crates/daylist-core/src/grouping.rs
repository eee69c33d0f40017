use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::store::FilterKey;
use crate::todo::{Tag, Todo};

/// Partition by exact date, most recent bucket first. Members keep their
/// insertion order; there is no secondary sort.
pub fn by_date(todos: &[Todo]) -> Vec<(NaiveDate, Vec<&Todo>)> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Todo>> = BTreeMap::new();
    for todo in todos {
        buckets.entry(todo.date).or_default().push(todo);
    }
    buckets.into_iter().rev().collect()
}

/// One bucket per label in `Tag::ALL` order, always all five. Membership is
/// multi-valued, so a record with several tags appears several times.
pub fn by_tag(todos: &[Todo]) -> Vec<(Tag, Vec<&Todo>)> {
    Tag::ALL
        .into_iter()
        .map(|tag| (tag, todos.iter().filter(|todo| todo.in_bucket(tag)).collect()))
        .collect()
}

/// The single bucket a selection key resolves to.
pub fn bucket<'a>(todos: &'a [Todo], key: &FilterKey) -> Vec<&'a Todo> {
    match key {
        FilterKey::Date(date) => todos.iter().filter(|todo| todo.date == *date).collect(),
        FilterKey::Tag(tag) => todos.iter().filter(|todo| todo.in_bucket(*tag)).collect(),
    }
}
