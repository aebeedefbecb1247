use crate::model::{AppState, Question, QuestionBank};
use crate::storage::{KeyValueStore, load_completed};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

// Submódulos
pub mod progress;
pub mod resets;
pub mod session;
pub mod view_models;

pub use crate::view_models::{ChapterInfo, RunSummary};

/// Número máximo de preguntas por ronda
pub const QUIZ_LENGTH: usize = 10;

/// Estado de la ronda en curso más el conjunto persistente de completadas.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub selected_chapters: BTreeSet<String>,
    pub questions: Vec<Question>, // Preguntas de esta ronda, ya barajadas
    pub index: usize,
    pub current_blanks: Vec<String>, // Ids de los huecos de la pregunta actual
    pub revealed: HashSet<String>,   // Huecos vistos en la pregunta actual
    pub completed: BTreeSet<String>, // Persistente entre sesiones
}

/// Preferencias de interfaz, guardadas por eframe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiPrefs {
    pub selected_chapters: BTreeSet<String>,
    pub shuffle: bool,
    pub dark_mode: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            selected_chapters: BTreeSet::new(),
            shuffle: true,
            dark_mode: true,
        }
    }
}

pub struct QuizApp {
    pub bank: QuestionBank,
    pub session: Session,
    pub state: AppState,
    pub prefs: UiPrefs,
    pub message: String,
    pub confirm_reset: bool,
    pub last_summary: Option<RunSummary>,
    store: Box<dyn KeyValueStore>,
}

impl QuizApp {
    pub fn new(bank: QuestionBank, store: Box<dyn KeyValueStore>) -> Self {
        let completed = load_completed(store.as_ref());
        log::info!(
            "loaded {} questions, {} completed",
            bank.len(),
            completed.len()
        );
        let mut app = Self {
            bank,
            session: Session {
                completed,
                ..Session::default()
            },
            state: AppState::Start,
            prefs: UiPrefs::default(),
            message: String::new(),
            confirm_reset: false,
            last_summary: None,
            store,
        };
        app.prefs.selected_chapters = app.all_chapter_ids();
        app
    }

    /// Aplica preferencias guardadas, descartando capítulos que ya no existen.
    pub fn with_prefs(mut self, mut prefs: UiPrefs) -> Self {
        prefs
            .selected_chapters
            .retain(|id| self.bank.chapters.contains_key(id));
        if prefs.selected_chapters.is_empty() {
            prefs.selected_chapters = self.all_chapter_ids();
        }
        self.prefs = prefs;
        self
    }

    pub fn all_chapter_ids(&self) -> BTreeSet<String> {
        self.bank.chapters.keys().cloned().collect()
    }

    pub fn toggle_chapter(&mut self, chapter_id: &str) {
        if !self.prefs.selected_chapters.remove(chapter_id) {
            self.prefs.selected_chapters.insert(chapter_id.to_string());
        }
    }

    pub(crate) fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }
}
