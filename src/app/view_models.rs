use super::*;

impl QuizApp {
    pub fn chapter_infos(&self) -> Vec<ChapterInfo> {
        self.bank
            .chapters
            .iter()
            .map(|(id, ch)| {
                let questions = self.bank.questions.iter().filter(|q| &q.chapter == id);
                let (total, completed) = questions.fold((0, 0), |(t, c), q| {
                    (t + 1, c + usize::from(self.session.completed.contains(&q.id)))
                });
                ChapterInfo {
                    id: id.clone(),
                    title: ch.title.clone(),
                    selected: self.prefs.selected_chapters.contains(id),
                    total,
                    completed,
                }
            })
            .collect()
    }

    /// Marcado HTML de la pregunta actual, para "Copiar HTML".
    pub fn current_question_html(&self) -> Option<String> {
        let q = self.current_question()?;
        Some(crate::blanks::render_html(&q.text, &q.id))
    }

    /// "Pregunta n / m" de la ronda en curso
    pub fn position_label(&self) -> Option<String> {
        self.current_question()?;
        Some(format!(
            "Pregunta {} / {}",
            self.session.index + 1,
            self.session.questions.len()
        ))
    }
}
