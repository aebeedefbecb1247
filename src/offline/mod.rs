// src/offline/mod.rs

//! Trabajador offline cache-first: precarga una caché con nombre al
//! instalarse, borra las cachés antiguas al activarse y sirve cada petición
//! desde la caché si puede, o desde la red si no.

pub mod cache;
pub mod network;

use crate::data::BANK_FILE;
use crate::error::{FetchError, WorkerError};
pub use cache::CacheStorage;
pub use network::{Network, Response};

#[cfg(not(target_arch = "wasm32"))]
pub use network::HttpNetwork;

/// Cambiar el nombre invalida las cachés de versiones anteriores.
pub const CACHE_NAME: &str = "blank-quiz-v1";
pub const PRECACHE_ASSETS: &[&str] = &[BANK_FILE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Parsed,
    Installing,
    Installed,
    Active,
    Redundant,
}

pub struct OfflineWorker<N: Network> {
    cache_name: String,
    assets: Vec<String>,
    caches: CacheStorage,
    network: N,
    state: WorkerState,
}

impl<N: Network> OfflineWorker<N> {
    pub fn new(cache_name: &str, assets: &[&str], caches: CacheStorage, network: N) -> Self {
        Self {
            cache_name: cache_name.to_string(),
            assets: assets.iter().map(|a| a.to_string()).collect(),
            caches,
            network,
            state: WorkerState::Parsed,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn caches(&self) -> &CacheStorage {
        &self.caches
    }

    /// Instala y activa. Si esta versión ya tiene su caché no se vuelve a
    /// descargar nada, pero la activación sigue borrando las antiguas.
    pub fn register(&mut self) -> Result<(), WorkerError> {
        if self.caches.has(&self.cache_name) {
            log::info!("offline cache {} already installed", self.cache_name);
            self.state = WorkerState::Installed;
            self.activate()?;
            return Ok(());
        }
        self.install()?;
        self.activate()?;
        Ok(())
    }

    /// Precarga todos los recursos. O se guardan todos o ninguno.
    pub fn install(&mut self) -> Result<(), WorkerError> {
        self.state = WorkerState::Installing;
        log::info!(
            "installing offline cache {} ({} assets)",
            self.cache_name,
            self.assets.len()
        );

        let fetched: Result<Vec<Response>, WorkerError> =
            self.assets.iter().map(|url| self.precache(url)).collect();

        let stored = fetched.and_then(|responses| {
            self.caches
                .put_all(&self.cache_name, responses)
                .map_err(WorkerError::from)
        });

        match stored {
            Ok(()) => {
                self.state = WorkerState::Installed;
                Ok(())
            }
            Err(e) => {
                log::warn!("offline cache install failed: {e}");
                self.state = WorkerState::Redundant;
                Err(e)
            }
        }
    }

    fn precache(&self, url: &str) -> Result<Response, WorkerError> {
        let precache_err = |source| WorkerError::Precache {
            url: url.to_string(),
            source,
        };
        let resp = self.network.fetch(url).map_err(precache_err)?;
        if !resp.is_ok() {
            return Err(precache_err(FetchError::Status {
                url: url.to_string(),
                status: resp.status,
            }));
        }
        Ok(resp)
    }

    /// Borra las cachés con otro nombre y pasa a activo. Devuelve las borradas.
    pub fn activate(&mut self) -> Result<Vec<String>, WorkerError> {
        match self.state {
            WorkerState::Installed | WorkerState::Active => {}
            other => return Err(WorkerError::NotInstalled(other)),
        }
        let stale: Vec<String> = self
            .caches
            .keys()
            .into_iter()
            .filter(|name| *name != self.cache_name)
            .collect();
        for name in &stale {
            self.caches.delete(name)?;
            log::info!("deleted stale cache {name}");
        }
        self.state = WorkerState::Active;
        Ok(stale)
    }

    /// Cache-first: copia en caché si existe, si no la red. Sin activar, todo va a red.
    pub fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        if self.state == WorkerState::Active {
            if let Some(hit) = self.caches.match_url_in(&self.cache_name, url) {
                log::debug!("cache hit {url}");
                return Ok(hit.clone());
            }
        }
        self.network.fetch(url)
    }
}

/// Descarga el banco remoto a través del trabajador offline, de modo que una
/// vez instalado funciona sin conexión.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_remote_bank(
    base_url: &str,
    cache_dir: &std::path::Path,
) -> Result<crate::model::QuestionBank, Box<dyn std::error::Error>> {
    let caches = CacheStorage::on_disk(cache_dir)?;
    let network = HttpNetwork::new(base_url)?;
    let mut worker = OfflineWorker::new(CACHE_NAME, PRECACHE_ASSETS, caches, network);
    if let Err(e) = worker.register() {
        // sin instalar el banco aún puede llegar por red
        log::warn!("offline worker not active: {e}");
    }
    let resp = worker.fetch(BANK_FILE)?;
    if !resp.is_ok() {
        return Err(FetchError::Status {
            url: resp.url,
            status: resp.status,
        }
        .into());
    }
    Ok(crate::data::parse_bank_bytes(resp.body)?)
}
