use thiserror::Error;

/// Fallos del almacenamiento clave-valor del progreso.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errores al cargar o validar el banco de preguntas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("question `{question}` references unknown chapter `{chapter}`")]
    UnknownChapter { question: String, chapter: String },
    #[error("duplicate question id `{0}`")]
    DuplicateId(String),
    #[error("bank body is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Motivos por los que no arranca una ronda. El texto es el que ve el usuario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartError {
    #[error("Selecciona al menos un capítulo.")]
    NoChapterSelected,
    #[error("No hay preguntas en los capítulos seleccionados.")]
    NoQuestions,
}

/// Fallos de red del trabajador offline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("network unavailable")]
    Offline,
    #[error("request for {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid url `{0}`")]
    InvalidUrl(String),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errores del ciclo de vida del trabajador offline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WorkerError {
    #[error("precaching {url} failed: {source}")]
    Precache {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("worker cannot be activated from state {0:?}")]
    NotInstalled(crate::offline::WorkerState),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
