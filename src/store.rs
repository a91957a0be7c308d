use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

/// Keys the game persists between runs.
pub mod keys {
    pub const BALANCE: &str = "purplemines_balance";
    pub const LAST_WAGER: &str = "purplemines_lastWager";
    pub const LAST_BOMBS: &str = "purplemines_lastBombs";
    pub const INTRO_DISMISSED: &str = "purplemines_introDismissed";
}

/// String key-value persistence. Missing keys read as `None`.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Keeps values for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// A flat JSON object on disk, rewritten on every `set`.
///
/// A file that is not a JSON object is moved to `<path>.bak` before the
/// first write rather than overwritten.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    foreign_file: bool,
}

impl FileStore {
    /// Load the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let (values, foreign_file) = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(values) => (values, false),
                Err(e) => {
                    warn!("Ignoring unreadable store {}: {}", path.display(), e);
                    (BTreeMap::new(), true)
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store at {}, starting fresh", path.display());
                (BTreeMap::new(), false)
            }
            Err(e) => {
                warn!("Failed to read store {}: {}", path.display(), e);
                (BTreeMap::new(), true)
            }
        };

        Self {
            path,
            values,
            foreign_file,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.foreign_file {
            let backup = self.backup_path();
            fs::rename(&self.path, &backup)?;
            warn!(
                "Moved unreadable store {} to {}",
                self.path.display(),
                backup.display()
            );
            self.foreign_file = false;
        }

        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            warn!("Failed to write store {}: {}", self.path.display(), e);
        }
    }
}
