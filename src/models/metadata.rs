use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{Result, RmToolsError};

/// Parent value marking an entry as deleted.
pub const TRASH_PARENT: &str = "trash";

/// The kind of repository entry described by a `.metadata` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// A folder.
    CollectionType,
    /// A notebook or an annotated document.
    DocumentType,
}

/// Contents of a `<uuid>.metadata` sidecar file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Name shown to the user.
    pub visible_name: String,
    /// UUID of the containing folder; empty for the root, `trash` when deleted.
    #[serde(default)]
    pub parent: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Milliseconds since the Unix epoch. The device writes this as a string.
    #[serde(deserialize_with = "millis_from_string_or_number")]
    pub last_modified: u64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub pinned: bool,
}

impl DocumentMetadata {
    pub fn is_trashed(&self) -> bool {
        self.parent == TRASH_PARENT
    }

    pub fn is_folder(&self) -> bool {
        self.entry_type == EntryType::CollectionType
    }
}

fn millis_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Number(u64),
        Text(String),
    }

    match Millis::deserialize(deserializer)? {
        Millis::Number(n) => Ok(n),
        Millis::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// One page entry of a format version 2 `.content` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    pub id: String,
    /// Present (with arbitrary content) when the page was deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<serde_json::Value>,
}

/// The `cPages` block of a format version 2 `.content` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPages {
    #[serde(default)]
    pub pages: Vec<ContentPage>,
}

/// Contents of a `<uuid>.content` sidecar file (only the fields needed to
/// find a document's pages).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// `"notebook"`, `"pdf"` or `"epub"`.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Page UUIDs, format version 1.
    #[serde(default)]
    pub pages: Option<Vec<String>>,
    /// Page entries, format version 2.
    #[serde(default)]
    pub c_pages: Option<ContentPages>,
}

fn default_format_version() -> u32 {
    1
}

impl DocumentContent {
    /// Parses a `.content` file.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the UUIDs of the document's live pages in display order.
    pub fn page_ids(&self) -> Result<Vec<String>> {
        match self.format_version {
            1 => Ok(self.pages.clone().unwrap_or_default()),
            2 => Ok(self
                .c_pages
                .as_ref()
                .map(|c| {
                    c.pages
                        .iter()
                        .filter(|p| p.deleted.is_none())
                        .map(|p| p.id.clone())
                        .collect()
                })
                .unwrap_or_default()),
            other => Err(RmToolsError::InvalidInput(format!(
                "unsupported .content formatVersion {}",
                other
            ))),
        }
    }
}
