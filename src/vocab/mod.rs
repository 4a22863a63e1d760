pub mod fetch;
pub mod library;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use fetch::{fetch_archive, RetryPolicy};
pub use library::{resolve_targets, OnDecodeError, VocabularyLibrary, VocabularySource};

/// One vocabulary entry. Word lists use the field names of the published
/// JapaneseVocabulary data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordItem {
    #[serde(rename = "假名")]
    pub kana: String,
    #[serde(rename = "日本汉字", default)]
    pub kanji: String,
    #[serde(rename = "中文释义")]
    pub meanings: Vec<String>,
}

/// Meanings do not take part in identity.
impl PartialEq for WordItem {
    fn eq(&self, other: &Self) -> bool {
        self.kana == other.kana && self.kanji == other.kanji
    }
}

impl Eq for WordItem {}

impl WordItem {
    pub fn meanings_joined(&self) -> String {
        self.meanings.join("/")
    }
}

/// Decodes one word-list file.
pub fn decode_words(leaf: &str, bytes: &[u8]) -> Result<Vec<WordItem>> {
    let decode_error = |source: serde_json::Error| Error::Decode {
        leaf: leaf.to_string(),
        source,
    };

    let words: Vec<WordItem> = serde_json::from_slice(bytes).map_err(decode_error)?;
    if let Some(word) = words.iter().find(|w| w.meanings.is_empty()) {
        let msg = format!("word {} has no meanings", word.kana);
        return Err(decode_error(serde::de::Error::custom(msg)));
    }
    Ok(words)
}
