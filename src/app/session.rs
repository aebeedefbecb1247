use super::*;
use crate::error::StartError;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    pub shuffle: bool,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self { shuffle: true }
    }
}

impl QuizApp {
    /// Arranca una ronda con los capítulos elegidos en la pantalla de inicio.
    pub fn start_from_prefs(&mut self) -> Result<(), StartError> {
        let selected = self.prefs.selected_chapters.clone();
        let options = StartOptions {
            shuffle: self.prefs.shuffle,
        };
        self.start_with_rng(&selected, options, &mut rand::rng())
    }

    pub fn start(&mut self, selected: &BTreeSet<String>) -> Result<(), StartError> {
        self.start_with_rng(selected, StartOptions::default(), &mut rand::rng())
    }

    /// Filtra por capítulos, baraja (Fisher–Yates) y recorta a [`QUIZ_LENGTH`].
    /// Si falla, la sesión no cambia y el motivo queda en `message`.
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        selected: &BTreeSet<String>,
        options: StartOptions,
        rng: &mut R,
    ) -> Result<(), StartError> {
        if selected.is_empty() {
            return Err(self.reject_start(StartError::NoChapterSelected));
        }

        let mut questions: Vec<Question> = self
            .bank
            .questions
            .iter()
            .filter(|q| selected.contains(&q.chapter))
            .cloned()
            .collect();
        if questions.is_empty() {
            return Err(self.reject_start(StartError::NoQuestions));
        }

        if options.shuffle {
            questions.shuffle(rng);
        }
        questions.truncate(QUIZ_LENGTH);

        log::info!(
            "starting run: {} questions from {} chapters",
            questions.len(),
            selected.len()
        );
        self.session.selected_chapters = selected.clone();
        self.session.questions = questions;
        self.session.index = 0;
        self.load_current_question();
        self.last_summary = None;
        self.state = AppState::Quiz;
        self.message.clear();
        Ok(())
    }

    fn reject_start(&mut self, err: StartError) -> StartError {
        log::warn!("cannot start run: {err:?}");
        self.message = err.to_string();
        err
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.state != AppState::Quiz {
            return None;
        }
        self.session.questions.get(self.session.index)
    }

    pub fn is_revealed(&self, blank_id: &str) -> bool {
        self.session.revealed.contains(blank_id)
    }

    pub fn all_revealed(&self) -> bool {
        !self.session.current_blanks.is_empty()
            && self
                .session
                .current_blanks
                .iter()
                .all(|id| self.session.revealed.contains(id))
    }

    /// Destapa un hueco de la pregunta actual. Devuelve `false` si ya estaba
    /// destapado o no pertenece a la pregunta. Al destapar el último, la
    /// pregunta pasa a completada y se guarda el progreso.
    pub fn reveal_blank(&mut self, blank_id: &str) -> bool {
        let Some(question_id) = self.current_question().map(|q| q.id.clone()) else {
            return false;
        };
        if !self.session.current_blanks.iter().any(|id| id == blank_id) {
            return false;
        }
        if !self.session.revealed.insert(blank_id.to_string()) {
            return false;
        }

        if self.all_revealed() {
            self.session.completed.insert(question_id);
            self.save_progress();
        }
        true
    }

    pub fn reveal_all(&mut self) {
        for id in self.session.current_blanks.clone() {
            self.reveal_blank(&id);
        }
    }

    /// Siguiente pregunta, o el resumen si era la última.
    pub fn advance(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        self.session.index += 1;
        if self.session.index >= self.session.questions.len() {
            let (completed, total) = self.progress_counts();
            self.last_summary = Some(RunSummary {
                attempted: self.session.questions.len(),
                completed,
                total,
            });
            self.session.revealed.clear();
            self.session.current_blanks.clear();
            self.state = AppState::Summary;
        } else {
            self.load_current_question();
        }
    }

    /// Vuelve a la pantalla de inicio
    pub fn retry(&mut self) {
        self.state = AppState::Start;
        self.message.clear();
    }

    fn load_current_question(&mut self) {
        self.session.revealed.clear();
        self.session.current_blanks = self
            .session
            .questions
            .get(self.session.index)
            .map(Question::blank_ids)
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_bank;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> QuestionBank {
        let mut yaml = String::from(
            "chapters:\n  a: { title: A, sections: { s: S } }\n  b: { title: B }\n  vacio: { title: V }\nquestions:\n",
        );
        for i in 0..14 {
            yaml.push_str(&format!(
                "  - {{ id: 'a{i}', chapter: a, section: s, text: 'x {{{{uno}}}} y {{{{dos}}}}' }}\n"
            ));
        }
        yaml.push_str("  - { id: 'b0', chapter: b, section: s, text: 'solo {{uno}}' }\n");
        yaml.push_str("  - { id: 'b1', chapter: b, section: s, text: 'sin huecos' }\n");
        parse_bank(&yaml).unwrap()
    }

    fn chapters(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn started(ids: &[&str], shuffle: bool) -> QuizApp {
        let mut app = QuizApp::new(bank(), Box::new(MemoryStore::default()));
        app.start_with_rng(&chapters(ids), StartOptions { shuffle }, &mut StdRng::seed_from_u64(7))
            .unwrap();
        app
    }

    #[test]
    fn start_truncates_to_ten_unique_questions() {
        for seed in 0..20 {
            let mut app = QuizApp::new(bank(), Box::new(MemoryStore::default()));
            app.start_with_rng(&chapters(&["a", "b"]), StartOptions::default(), &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let ids: HashSet<&str> = app.session.questions.iter().map(|q| q.id.as_str()).collect();
            assert_eq!(app.session.questions.len(), QUIZ_LENGTH);
            assert_eq!(ids.len(), QUIZ_LENGTH);
            assert_eq!(app.session.index, 0);
            assert_eq!(app.state, AppState::Quiz);
        }
    }

    #[test]
    fn start_filters_by_chapter_and_keeps_order_without_shuffle() {
        let app = started(&["b"], false);
        let ids: Vec<&str> = app.session.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["b0", "b1"]);
    }

    #[test]
    fn empty_selection_leaves_state_unchanged() {
        let mut app = started(&["b"], false);
        app.reveal_blank("b0-0");
        let before = app.session.clone();

        let err = app.start(&BTreeSet::new()).unwrap_err();
        assert_eq!(err, StartError::NoChapterSelected);
        assert_eq!(app.message, "Selecciona al menos un capítulo.");
        assert_eq!(app.session.questions, before.questions);
        assert_eq!(app.session.revealed, before.revealed);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn start_from_prefs_reports_empty_selection_in_message() {
        let mut app = QuizApp::new(bank(), Box::new(MemoryStore::default()));
        app.prefs.selected_chapters.clear();
        assert_eq!(app.start_from_prefs(), Err(StartError::NoChapterSelected));
        assert_eq!(app.message, "Selecciona al menos un capítulo.");
        assert_eq!(app.state, AppState::Start);
    }

    #[test]
    fn chapter_without_questions_is_rejected() {
        let mut app = QuizApp::new(bank(), Box::new(MemoryStore::default()));
        assert_eq!(app.start(&chapters(&["vacio"])), Err(StartError::NoQuestions));
        assert_eq!(app.state, AppState::Start);
        assert!(app.session.questions.is_empty());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut app = started(&["a"], false);
        assert!(app.reveal_blank("a0-0"));
        let revealed = app.session.revealed.clone();
        assert!(!app.reveal_blank("a0-0"));
        assert_eq!(app.session.revealed, revealed);
        assert!(app.session.completed.is_empty());
    }

    #[test]
    fn unknown_blank_is_ignored() {
        let mut app = started(&["a"], false);
        assert!(!app.reveal_blank("a1-0"));
        assert!(!app.reveal_blank("a0-9"));
        assert!(app.session.revealed.is_empty());
    }

    #[test]
    fn completed_only_when_every_blank_revealed() {
        let mut app = started(&["a"], false);
        app.reveal_blank("a0-1");
        assert!(!app.session.completed.contains("a0"));
        app.reveal_blank("a0-0");
        assert!(app.session.completed.contains("a0"));
    }

    #[test]
    fn reveal_all_completes_current_question() {
        let mut app = started(&["a"], false);
        app.reveal_blank("a0-0");
        app.reveal_all();
        assert!(app.all_revealed());
        assert_eq!(app.session.completed, chapters(&["a0"]));
    }

    #[test]
    fn question_without_blanks_never_completes() {
        let mut app = started(&["b"], false);
        app.advance();
        assert_eq!(app.current_question().unwrap().id, "b1");
        app.reveal_all();
        assert!(!app.all_revealed());
        assert!(app.session.completed.is_empty());
    }

    #[test]
    fn advance_resets_revealed_and_ends_in_summary() {
        let mut app = started(&["b"], false);
        app.reveal_all();
        app.advance();
        assert!(app.session.revealed.is_empty());
        assert_eq!(app.session.current_blanks, Vec::<String>::new());
        app.advance();
        assert_eq!(app.state, AppState::Summary);
        assert!(app.current_question().is_none());
        assert_eq!(
            app.last_summary,
            Some(RunSummary { attempted: 2, completed: 1, total: 16 })
        );

        // fuera del quiz no hace nada
        app.advance();
        assert_eq!(app.state, AppState::Summary);
        app.retry();
        assert_eq!(app.state, AppState::Start);
    }

    #[test]
    fn revealing_again_in_new_viewing_keeps_completion() {
        let mut app = started(&["b"], false);
        app.reveal_all();
        app.start_with_rng(&chapters(&["b"]), StartOptions { shuffle: false }, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert!(!app.is_revealed("b0-0"));
        assert!(app.session.completed.contains("b0"));
    }
}
