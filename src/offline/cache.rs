// src/offline/cache.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::network::Response;
use crate::error::StorageError;

type Entries = BTreeMap<String, Response>;

/// Cachés con nombre, url -> respuesta. Con `root` cada caché se guarda en
/// `<root>/<nombre>.json` y sobrevive a reinicios.
#[derive(Debug, Default)]
pub struct CacheStorage {
    root: Option<PathBuf>,
    caches: BTreeMap<String, Entries>,
}

impl CacheStorage {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Abre las cachés guardadas en `root`. Un fichero ilegible se ignora.
    pub fn on_disk(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        let mut caches = BTreeMap::new();
        for entry in std::fs::read_dir(&root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match read_entries(&path) {
                Ok(entries) => {
                    caches.insert(name.to_string(), entries);
                }
                Err(e) => log::warn!("skipping unreadable cache {}: {e}", path.display()),
            }
        }
        Ok(Self {
            root: Some(root),
            caches,
        })
    }

    pub fn has(&self, name: &str) -> bool {
        self.caches.contains_key(name)
    }

    pub fn keys(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    /// Abre (o crea) la caché `name` y guarda todas las respuestas.
    pub fn put_all(&mut self, name: &str, responses: Vec<Response>) -> Result<(), StorageError> {
        let mut entries = self.caches.get(name).cloned().unwrap_or_default();
        for resp in responses {
            entries.insert(resp.url.clone(), resp);
        }
        self.persist(name, &entries)?;
        self.caches.insert(name.to_string(), entries);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<bool, StorageError> {
        if self.caches.remove(name).is_none() {
            return Ok(false);
        }
        if let Some(root) = &self.root {
            match std::fs::remove_file(cache_file(root, name)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(true)
    }

    /// Busca `url` en todas las cachés.
    pub fn match_url(&self, url: &str) -> Option<&Response> {
        self.caches.values().find_map(|entries| entries.get(url))
    }

    /// Como [`match_url`](Self::match_url), pero mira primero en la caché `preferred`.
    pub fn match_url_in(&self, preferred: &str, url: &str) -> Option<&Response> {
        self.caches
            .get(preferred)
            .and_then(|entries| entries.get(url))
            .or_else(|| self.match_url(url))
    }

    fn persist(&self, name: &str, entries: &Entries) -> Result<(), StorageError> {
        if let Some(root) = &self.root {
            let json = serde_json::to_string(entries)?;
            std::fs::write(cache_file(root, name), json)?;
        }
        Ok(())
    }
}

fn cache_file(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{name}.json"))
}

fn read_entries(path: &Path) -> Result<Entries, StorageError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
