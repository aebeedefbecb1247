use super::*;
use crate::storage::save_completed;

impl QuizApp {
    /// (completadas, total) del banco actual. Ids guardados que ya no están
    /// en el banco no cuentan.
    pub fn progress_counts(&self) -> (usize, usize) {
        let completed = self
            .bank
            .questions
            .iter()
            .filter(|q| self.session.completed.contains(&q.id))
            .count();
        (completed, self.bank.len())
    }

    pub fn progress_label(&self) -> String {
        let (completed, total) = self.progress_counts();
        format!("{completed} / {total} preguntas completadas")
    }

    pub fn is_completed(&self, question_id: &str) -> bool {
        self.session.completed.contains(question_id)
    }

    pub(crate) fn save_progress(&mut self) {
        let completed = self.session.completed.clone();
        save_completed(self.store_mut(), &completed);
    }
}
