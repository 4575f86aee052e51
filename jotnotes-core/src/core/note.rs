use serde::{Deserialize, Serialize};

/// Text shown in place of an empty note body.
pub const EMPTY_NOTE_PLACEHOLDER: &str = "Empty note";

/// A single stored note.
///
/// `id` is assigned by SQLite on insertion and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Splits the note into its `(id, title, content)` triple.
    pub fn into_parts(self) -> (i64, String, String) {
        (self.id, self.title, self.content)
    }

    /// Returns the body, or [`EMPTY_NOTE_PLACEHOLDER`] when there is none.
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            EMPTY_NOTE_PLACEHOLDER
        } else {
            &self.content
        }
    }
}
