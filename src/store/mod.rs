// Joke store module
//
// Durable CRUD over the two persisted collections: custom jokes grouped by
// language, and the flat deduplicated favorites list. Every mutation writes
// the whole affected collection back to disk before returning, so in-memory
// and persisted state never diverge between operations.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::fs;
use thiserror::Error;

/// Custom jokes grouped by language code. Insertion order is preserved for
/// both languages and the jokes within each language; duplicates are allowed.
pub type CustomJokeSet = IndexMap<String, Vec<String>>;

const CUSTOM_JOKES_FILE: &str = "custom_jokes.json";
const FAVORITE_JOKES_FILE: &str = "favorite_jokes.json";

/// Errors that can occur in store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("favorite index {index} out of bounds (list has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Durable store for custom and favorite jokes.
///
/// Owns both the in-memory collections and their load/save operations; there
/// is no ambient/global state. Backing storage is two independent JSON files
/// under the data directory:
/// - `custom_jokes.json`: object of language code -> array of joke texts
/// - `favorite_jokes.json`: array of joke texts
///
/// Absent or unparsable files are treated as empty rather than fatal; the
/// data is user-editable jokes, so availability wins over strict validation.
#[derive(Debug, Clone)]
pub struct JokeStore {
    data_dir: Utf8PathBuf,
    custom_path: Utf8PathBuf,
    favorites_path: Utf8PathBuf,
    custom: CustomJokeSet,
    favorites: Vec<String>,
}

impl JokeStore {
    /// Open a store rooted at `data_dir`, loading both collections.
    ///
    /// Creates the data directory if it doesn't exist. Missing or corrupt
    /// collection files load as empty.
    pub fn open<P: AsRef<Utf8Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create data directory: {}", data_dir))?;
        }

        let custom_path = data_dir.join(CUSTOM_JOKES_FILE);
        let favorites_path = data_dir.join(FAVORITE_JOKES_FILE);

        let custom = load_collection(&custom_path, "custom jokes");
        let favorites = load_collection(&favorites_path, "favorite jokes");

        Ok(Self {
            data_dir,
            custom_path,
            favorites_path,
            custom,
            favorites,
        })
    }

    /// The full custom joke set, all languages.
    pub fn custom_jokes(&self) -> &CustomJokeSet {
        &self.custom
    }

    /// Custom jokes for one language; empty slice if the language is absent.
    pub fn custom_for(&self, language: &str) -> &[String] {
        self.custom.get(language).map_or(&[], Vec::as_slice)
    }

    /// Append a joke to the sequence for `language`, creating the sequence
    /// if absent, then persist the whole set.
    ///
    /// Callers validate the text first: empty/whitespace-only input must not
    /// reach the store.
    pub fn add_custom_joke(&mut self, language: &str, text: &str) -> Result<()> {
        self.custom
            .entry(language.to_string())
            .or_default()
            .push(text.to_string());
        self.persist_custom()?;
        tracing::info!("Added custom joke for language '{}'", language);
        Ok(())
    }

    /// The ordered favorites list.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Append `text` to favorites if not already present (exact match),
    /// then persist. Returns whether an insertion occurred; duplicates are
    /// a no-op and skip the disk write.
    pub fn add_favorite(&mut self, text: &str) -> Result<bool> {
        if self.favorites.iter().any(|joke| joke == text) {
            tracing::debug!("Favorite already present, skipping insert");
            return Ok(false);
        }
        self.favorites.push(text.to_string());
        self.persist_favorites()?;
        tracing::info!("Added favorite ({} total)", self.favorites.len());
        Ok(true)
    }

    /// Remove and return the favorite at `index`, then persist.
    ///
    /// An out-of-bounds index is a contract violation by the caller (the
    /// presentation layer only offers valid indices); it fails with
    /// [`StoreError::IndexOutOfBounds`] and leaves the list unchanged.
    pub fn remove_favorite_at(&mut self, index: usize) -> Result<String> {
        if index >= self.favorites.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.favorites.len(),
            }
            .into());
        }
        let removed = self.favorites.remove(index);
        self.persist_favorites()?;
        tracing::info!("Removed favorite at index {}", index);
        Ok(removed)
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    fn persist_custom(&self) -> Result<()> {
        write_collection(&self.custom_path, &self.custom, "custom jokes")
    }

    fn persist_favorites(&self) -> Result<()> {
        write_collection(&self.favorites_path, &self.favorites, "favorite jokes")
    }
}

/// Read a JSON collection from disk, defaulting to empty when the file is
/// absent or unparsable.
fn load_collection<T>(path: &Utf8Path, label: &str) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    if !path.exists() {
        tracing::debug!("No {} file at {}, starting empty", label, path);
        return T::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("Failed to read {} from {}: {}", label, path, e);
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded {} from {}", label, path);
            value
        }
        Err(e) => {
            tracing::warn!(
                "Corrupt {} file at {}, treating as empty: {}",
                label,
                path,
                e
            );
            T::default()
        }
    }
}

/// Serialize the entire collection to its backing file. Whole-collection
/// writes bound corruption to one collection at a time.
fn write_collection<T: serde::Serialize>(path: &Utf8Path, value: &T, label: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", label))?;

    fs::write(path, json).with_context(|| format!("Failed to write {}: {}", label, path))?;

    tracing::debug!("Persisted {} to {}", label, path);
    Ok(())
}
