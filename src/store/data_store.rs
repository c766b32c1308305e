/// JSON file store for survey data, distro scores and hardware facts
///
/// Every document is read wholesale and written back wholesale. A missing
/// file means "nothing yet" and a broken one is logged and treated the same
/// way, so callers always get a usable (maybe empty) record.

use crate::error::Result;
use crate::store::models::{
    MarkingDocument, MarkingScheme, Question, QuestionsDocument, RegistryDocument, Responses,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const QUESTIONS_FILE: &str = "questionnaire.json";
pub const MARKING_FILE: &str = "marking.json";
pub const RESPONSES_FILE: &str = "responses.json";
pub const REGISTRY_FILE: &str = "distro.json";
pub const HARDWARE_FILE: &str = "hardware_info.json";

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Create a store over `data_dir`
    ///
    /// Nothing is touched on disk until the first save.
    ///
    /// # Examples
    /// ```no_run
    /// use distro_finder_lib::store::DataStore;
    ///
    /// let store = DataStore::new("/home/me/.distro-finder/data");
    /// let responses = store.load_responses();
    /// println!("{} answers so far", responses.len());
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory
    pub fn path(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of one of the store's files
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    pub fn load_questions(&self) -> Vec<Question> {
        self.load_or_default::<QuestionsDocument>(QUESTIONS_FILE)
            .questions
    }

    pub fn load_marking(&self) -> MarkingScheme {
        self.load_or_default::<MarkingDocument>(MARKING_FILE)
            .user_vector
    }

    pub fn load_responses(&self) -> Responses {
        self.load_or_default(RESPONSES_FILE)
    }

    pub fn save_responses(&self, responses: &Responses) -> Result<()> {
        self.save(RESPONSES_FILE, responses)
    }

    pub fn load_registry(&self) -> RegistryDocument {
        self.load_or_default(REGISTRY_FILE)
    }

    /// Load the raw hardware facts document
    ///
    /// Kept as a JSON value: interpreting it is the classifier's job, and a
    /// half-broken record should still reach it so it can fall back.
    pub fn load_hardware_facts(&self) -> serde_json::Value {
        self.load_or_default::<Option<serde_json::Value>>(HARDWARE_FILE)
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()))
    }

    pub fn save_hardware_facts(&self, facts: &serde_json::Value) -> Result<()> {
        self.save(HARDWARE_FILE, facts)
    }

    /// Read and parse a JSON file, or return an empty default
    fn load_or_default<T: DeserializeOwned + Default>(&self, file_name: &str) -> T {
        let path = self.file_path(file_name);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, using defaults", path.display());
                return T::default();
            }
            Err(e) => {
                tracing::warn!("Couldn't read {}: {}", path.display(), e);
                return T::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Malformed JSON in {}: {}", path.display(), e);
                T::default()
            }
        }
    }

    /// Overwrite a whole file with pretty-printed JSON
    fn save<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.file_path(file_name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;

        tracing::debug!("Saved {}", path.display());
        Ok(())
    }
}
