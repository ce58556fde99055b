//! Stop-word list used by the word frequency and word cloud reducers.
//!
//! The list is a whitespace-delimited text file. [`StopWords::shared`] keeps
//! one loaded copy per path for the life of the process.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex};

use tracing::debug;

use crate::error::{ChatlensError, Result};

static CACHE: LazyLock<Mutex<HashMap<PathBuf, Arc<StopWords>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A set of words to ignore when counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a list from whitespace-delimited text. Words are kept as written.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Reads a list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`] if the file does not exist,
    /// or [`ChatlensError::Io`] for any other read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ChatlensError::missing_stop_words(path),
            _ => ChatlensError::Io(e),
        })?;
        let words = Self::from_text(&text);
        debug!(path = %path.display(), words = words.len(), "loaded stop words");
        Ok(words)
    }

    /// Returns the cached list for `path`, loading it on first use.
    ///
    /// Failed loads are not cached, so a file created later is picked up.
    pub fn shared(path: impl AsRef<Path>) -> Result<Arc<Self>> {
        let path = path.as_ref();
        let mut cache = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(words) = cache.get(path) {
            return Ok(Arc::clone(words));
        }
        let words = Arc::new(Self::load(path)?);
        cache.insert(path.to_path_buf(), Arc::clone(&words));
        Ok(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
