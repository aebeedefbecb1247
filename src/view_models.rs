// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterInfo {
    pub id: String,
    pub title: String,
    pub selected: bool,
    pub total: usize,
    pub completed: usize,
}

/// Resultado de una ronda terminada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize, // preguntas vistas en esta ronda
    pub completed: usize, // acumulado
    pub total: usize,
}

impl ChapterInfo {
    pub fn label(&self) -> String {
        if self.total > 0 && self.completed == self.total {
            format!("{} ✅ ({}/{})", self.title, self.completed, self.total)
        } else {
            format!("{} ({}/{})", self.title, self.completed, self.total)
        }
    }
}

impl RunSummary {
    pub fn message(&self) -> String {
        format!(
            "Has estudiado {} preguntas. Acumulado: {} / {} completadas.",
            self.attempted, self.completed, self.total
        )
    }
}
