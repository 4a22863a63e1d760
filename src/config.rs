use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::error::Result;
use crate::targets::MinTargets;
use crate::vocab::RetryPolicy;

pub const DEFAULT_VOCABULARY_URL: &str =
    "https://github.com/CloudGee/JapaneseVocabulary/archive/refs/heads/main.zip";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub include_hiragana: bool,
    pub include_katakana: bool,
    /// Hiragana glyphs selected when the app starts.
    pub selected_kana: Vec<String>,
    pub min_kana_targets: usize,
    pub min_word_targets: usize,
    pub vocabulary_url: String,
    /// Directory inside the archive that holds the word lists.
    pub library_dir: String,
    pub fetch_attempts: u32,
    pub fetch_retry_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_hiragana: true,
            include_katakana: true,
            selected_kana: Vec::new(),
            min_kana_targets: 2,
            min_word_targets: 1,
            vocabulary_url: DEFAULT_VOCABULARY_URL.to_string(),
            library_dir: "vocabularyLib".to_string(),
            fetch_attempts: 4,
            fetch_retry_delay_ms: 2000,
        }
    }
}

impl Config {
    pub fn min_kana_targets(&self) -> MinTargets {
        MinTargets(self.min_kana_targets)
    }

    pub fn min_word_targets(&self) -> MinTargets {
        MinTargets(self.min_word_targets)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.fetch_attempts,
            delay: Duration::from_millis(self.fetch_retry_delay_ms),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "fiftysound") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("fiftysound_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
