use serde::{Deserialize, Serialize};

use crate::error::FetchError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(url: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.to_string(),
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Acceso a red que el trabajador usa cuando no hay copia en caché.
pub trait Network {
    fn fetch(&self, url: &str) -> Result<Response, FetchError>;
}

/// Cliente HTTP bloqueante que resuelve rutas relativas contra `base`.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpNetwork {
    client: reqwest::blocking::Client,
    base: reqwest::Url,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpNetwork {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut normalized = base.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base = reqwest::Url::parse(&normalized)
            .map_err(|_| FetchError::InvalidUrl(base.to_string()))?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("BlankQuiz/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    pub fn resolve(&self, url: &str) -> Result<reqwest::Url, FetchError> {
        self.base
            .join(url)
            .map_err(|_| FetchError::InvalidUrl(url.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Network for HttpNetwork {
    fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        let target = self.resolve(url)?;
        log::debug!("GET {target}");
        let resp = self.client.get(target).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(Response {
            url: url.to_string(),
            status,
            body,
        })
    }
}
