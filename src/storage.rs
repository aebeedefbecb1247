// src/storage.rs

//! Persistencia del progreso: ids de preguntas completadas bajo la clave
//! `quizProgress`, en JSON `{ "completedQuestions": [...] }`.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StorageError;

pub const STORAGE_KEY: &str = "quizProgress";

/// Almacenamiento clave-valor duradero (localStorage en web, ficheros en nativo).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub completed_questions: Vec<String>,
}

/// Lee el conjunto de completadas. Ausencia, error de lectura o JSON corrupto
/// dan un conjunto vacío.
pub fn load_completed(store: &dyn KeyValueStore) -> BTreeSet<String> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeSet::new(),
        Err(e) => {
            log::error!("failed to read progress: {e}");
            return BTreeSet::new();
        }
    };
    match serde_json::from_str::<ProgressRecord>(&raw) {
        Ok(record) => record.completed_questions.into_iter().collect(),
        Err(e) => {
            log::error!("stored progress is corrupt, starting empty: {e}");
            BTreeSet::new()
        }
    }
}

/// Guardado best-effort: los fallos se registran y se ignoran.
pub fn save_completed(store: &mut dyn KeyValueStore, completed: &BTreeSet<String>) {
    let record = ProgressRecord {
        completed_questions: completed.iter().cloned().collect(),
    };
    let result = serde_json::to_string(&record)
        .map_err(StorageError::from)
        .and_then(|json| store.set(STORAGE_KEY, &json));
    if let Err(e) = result {
        log::error!("failed to save progress: {e}");
    }
}

pub fn clear_progress(store: &mut dyn KeyValueStore) {
    if let Err(e) = store.remove(STORAGE_KEY) {
        log::error!("failed to clear progress: {e}");
    }
}

/// Almacén en memoria. Los clones comparten contenido.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    /// Un almacén que falla en todas las operaciones.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory store disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Un fichero `<clave>.json` por clave dentro de `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `window.localStorage` del navegador.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("localStorage".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}
