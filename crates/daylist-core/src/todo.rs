use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of category labels. `Other` doubles as the catch-all
/// bucket for records carrying no explicit tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Clothing,
    Food,
    Housing,
    Transport,
    Other,
}

impl Tag {
    /// Canonical bucket order; grouping exposes every entry, empty or not.
    pub const ALL: [Tag; 5] = [
        Tag::Clothing,
        Tag::Food,
        Tag::Housing,
        Tag::Transport,
        Tag::Other,
    ];

    /// Labels the add form offers. `Other` is only reachable implicitly,
    /// by submitting a record with no tags at all.
    pub const SELECTABLE: [Tag; 4] = [Tag::Clothing, Tag::Food, Tag::Housing, Tag::Transport];

    pub fn label(self) -> &'static str {
        match self {
            Tag::Clothing => "Clothing",
            Tag::Food => "Food",
            Tag::Housing => "Housing",
            Tag::Transport => "Transport",
            Tag::Other => "Other",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Clothing => "clothing",
            Tag::Food => "food",
            Tag::Housing => "housing",
            Tag::Transport => "transport",
            Tag::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,

    pub text: String,

    pub completed: bool,

    pub date: NaiveDate,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Todo {
    pub fn new(id: u64, text: String, date: NaiveDate, tags: Vec<Tag>) -> Self {
        Self {
            id,
            text,
            completed: false,
            date,
            tags,
        }
    }

    /// Tag-bucket membership is multi-valued: a record sits in every bucket
    /// of its tags, and an untagged record sits only in `Other`.
    pub fn in_bucket(&self, tag: Tag) -> bool {
        if self.tags.is_empty() {
            tag == Tag::Other
        } else {
            self.tags.contains(&tag)
        }
    }
}
