use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::datetime;
use crate::grouping;
use crate::storage::{TodoStorage, decode_todos, encode_todos};
use crate::todo::{Tag, Todo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    Date,
    Tag,
}

/// A sidebar selection. The key carries its grouping mode, so picking an
/// entry switches mode and bucket in one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Date(NaiveDate),
    Tag(Tag),
}

impl FilterKey {
    pub fn mode(self) -> GroupMode {
        match self {
            FilterKey::Date(_) => GroupMode::Date,
            FilterKey::Tag(_) => GroupMode::Tag,
        }
    }
}

/// Owns the collection and the selection state. Every mutation writes the
/// whole collection back through the injected storage slot, synchronously,
/// after the in-memory update.
#[derive(Debug, Clone)]
pub struct TodoStore<S: TodoStorage> {
    todos: Vec<Todo>,
    selection: Option<FilterKey>,
    load_notice: Option<String>,
    storage: S,
}

impl<S: TodoStorage> TodoStore<S> {
    /// One-time startup load. An absent slot starts empty; an unreadable
    /// slot also starts empty but keeps a notice for the UI instead of
    /// failing the whole application. A non-empty collection selects its
    /// most recent date.
    pub fn open(storage: S) -> Self {
        let (todos, load_notice) = match storage.load() {
            Ok(Some(payload)) => match decode_todos(&payload) {
                Ok(todos) => (todos, None),
                Err(err) => {
                    error!(error = %err, "stored todos were unreadable; starting empty");
                    (Vec::new(), Some(LOAD_NOTICE.to_string()))
                }
            },
            Ok(None) => (Vec::new(), None),
            Err(err) => {
                error!(error = %err, "failed reading stored todos; starting empty");
                (Vec::new(), Some(LOAD_NOTICE.to_string()))
            }
        };

        let selection = latest_date(&todos).map(FilterKey::Date);
        info!(count = todos.len(), selection = ?selection, "opened todo store");

        Self {
            todos,
            selection,
            load_notice,
            storage,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn selection(&self) -> Option<FilterKey> {
        self.selection
    }

    pub fn mode(&self) -> GroupMode {
        self.selection.map(FilterKey::mode).unwrap_or(GroupMode::Date)
    }

    /// Set when the persisted payload could not be read at startup.
    pub fn load_notice(&self) -> Option<&str> {
        self.load_notice.as_deref()
    }

    /// Appends a record and selects its date bucket so it is immediately
    /// visible. Empty-after-trim text is rejected silently.
    pub fn add(&mut self, text: &str, date: NaiveDate, tags: Vec<Tag>) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            warn!("ignored todo with empty text");
            return None;
        }

        let id = next_id(&self.todos, datetime::now_millis());
        debug!(id, date = %date, tag_count = tags.len(), "adding todo");

        self.todos.push(Todo::new(id, trimmed.to_string(), date, tags));
        self.selection = Some(FilterKey::Date(date));
        self.persist();
        Some(id)
    }

    pub fn toggle_completed(&mut self, id: u64) {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            warn!(id, "toggle for unknown todo id");
            return;
        };

        todo.completed = !todo.completed;
        debug!(id, completed = todo.completed, "toggled todo");
        self.persist();
    }

    pub fn delete(&mut self, id: u64) {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() == before {
            warn!(id, "delete for unknown todo id");
            return;
        }

        debug!(id, "deleted todo");
        self.persist();
    }

    pub fn select(&mut self, key: FilterKey) {
        debug!(selection = ?key, "selection changed");
        self.selection = Some(key);
    }

    /// Exactly the bucket the current selection resolves to; empty when
    /// nothing is selected.
    pub fn visible(&self) -> Vec<&Todo> {
        match &self.selection {
            Some(key) => grouping::bucket(&self.todos, key),
            None => Vec::new(),
        }
    }

    /// Writes are fire-and-forget: a failure is logged and never retried.
    fn persist(&self) {
        let payload = match encode_todos(&self.todos) {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "failed to serialize todos; skipping write");
                return;
            }
        };

        if let Err(err) = self.storage.save(&payload) {
            error!(error = %err, "failed to persist todos");
        }
    }
}

const LOAD_NOTICE: &str = "Stored todos could not be read; starting with an empty list.";

fn latest_date(todos: &[Todo]) -> Option<NaiveDate> {
    todos.iter().map(|todo| todo.date).max()
}

/// Fresh ids are millisecond timestamps, bumped past the current maximum
/// when two creations land on the same tick, so ids stay unique and
/// monotonic by creation time.
pub fn next_id(todos: &[Todo], now_ms: u64) -> u64 {
    match todos.iter().map(|todo| todo.id).max() {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}
