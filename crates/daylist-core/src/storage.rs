use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::todo::Todo;

/// A single durable slot holding the whole serialized collection. Injected
/// into the store so the browser backend, a file, or an in-memory fake can
/// stand behind the same contract.
pub trait TodoStorage {
    /// `Ok(None)` means the slot has never been written.
    fn load(&self) -> anyhow::Result<Option<String>>;

    fn save(&self, payload: &str) -> anyhow::Result<()>;
}

/// The collection travels as one JSON array of records with the field names
/// id, text, completed, date, tags. No versioning, no migration.
pub fn encode_todos(todos: &[Todo]) -> anyhow::Result<String> {
    serde_json::to_string(todos).context("failed to serialize todos")
}

pub fn decode_todos(payload: &str) -> anyhow::Result<Vec<Todo>> {
    serde_json::from_str(payload).context("failed to parse stored todos")
}

/// In-process fake for tests. Clones share one slot, the way every handle
/// to browser storage sees the same origin-scoped key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(payload.to_string()))),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TodoStorage for MemoryStorage {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, payload: &str) -> anyhow::Result<()> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Native file backend: one JSON document, written atomically through a
/// sibling temp file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform data dir>/daylist/todos.json`.
    pub fn default_path() -> anyhow::Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| anyhow!("no platform data directory"))?;
        Ok(Self::new(base.join("daylist").join("todos.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStorage for FileStorage {
    fn load(&self) -> anyhow::Result<Option<String>> {
        debug!(file = %self.path.display(), "loading todo slot");
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading {}", self.path.display()))?;
        Ok(Some(raw))
    }

    fn save(&self, payload: &str) -> anyhow::Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(payload.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|err| anyhow!("failed to persist {}: {}", self.path.display(), err))?;

        debug!(file = %self.path.display(), bytes = payload.len(), "saved todo slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileStorage, MemoryStorage, TodoStorage, decode_todos, encode_todos};
    use crate::todo::{Tag, Todo};

    fn sample_todos() -> Vec<Todo> {
        let mut paid = Todo::new(
            1714500000000,
            "pay rent".to_string(),
            "2024-05-01".parse().expect("valid date literal"),
            vec![Tag::Housing],
        );
        paid.completed = true;

        vec![
            paid,
            Todo::new(
                1714500000001,
                "buy milk".to_string(),
                "2024-05-01".parse().expect("valid date literal"),
                vec![Tag::Food, Tag::Transport],
            ),
            Todo::new(
                1714586400000,
                "no tags here".to_string(),
                "2024-05-02".parse().expect("valid date literal"),
                vec![],
            ),
        ]
    }

    #[test]
    fn encode_decode_round_trip_preserves_fields_and_order() {
        let todos = sample_todos();
        let payload = encode_todos(&todos).expect("encode");
        let restored = decode_todos(&payload).expect("decode");
        assert_eq!(restored, todos);
    }

    #[test]
    fn payload_is_self_describing_json() {
        let payload = encode_todos(&sample_todos()).expect("encode");
        for field in ["\"id\"", "\"text\"", "\"completed\"", "\"date\"", "\"tags\""] {
            assert!(payload.contains(field), "missing {field} in {payload}");
        }
        assert!(payload.contains("\"2024-05-01\""));
        assert!(payload.contains("\"food\""));
    }

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.load().expect("load").is_none());

        storage.save("[]").expect("save");
        assert_eq!(storage.load().expect("load").as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_round_trips_and_reports_absent_slot() {
        let temp = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(temp.path().join("todos.json"));

        assert!(storage.load().expect("load").is_none());

        let payload = encode_todos(&sample_todos()).expect("encode");
        storage.save(&payload).expect("save");
        assert_eq!(storage.load().expect("load").as_deref(), Some(payload.as_str()));

        storage.save("[]").expect("overwrite");
        assert_eq!(storage.load().expect("load").as_deref(), Some("[]"));
    }
}
