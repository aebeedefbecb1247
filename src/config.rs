// src/config.rs

use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "BLANK_QUIZ_DATA_DIR";
pub const BANK_URL_VAR: &str = "BLANK_QUIZ_BANK_URL";
const DEFAULT_DATA_DIR: &str = "blank_quiz_data";

/// Configuración de arranque leída del entorno.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Directorio del progreso (`quizProgress.json`) y de la caché offline
    pub data_dir: PathBuf,
    /// Base remota desde la que descargar `question_bank.yaml`
    pub bank_url: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bank_url: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();
        if let Some(dir) = non_empty(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        config.bank_url = non_empty(BANK_URL_VAR);
        config
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("offline_cache")
    }
}
