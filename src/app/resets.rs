use super::*;
use crate::storage::clear_progress;
use eframe::egui;

impl QuizApp {
    /// Pide confirmación antes de borrar el progreso.
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    /// Borra las completadas en memoria y en el almacenamiento.
    pub fn reset_progress(&mut self) {
        log::info!("resetting progress ({} completed)", self.session.completed.len());
        self.session.completed.clear();
        clear_progress(self.store_mut());
        self.confirm_reset = false;
        self.last_summary = None;
        self.message.clear();
        self.state = AppState::Start;
    }

    pub fn show_reset_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todo tu progreso? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.cancel_reset();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_bank_embedded;
    use crate::storage::{MemoryStore, STORAGE_KEY};

    #[test]
    fn reset_clears_memory_and_storage() {
        let store = MemoryStore::default();
        let mut app = QuizApp::new(read_bank_embedded().unwrap(), Box::new(store.clone()));
        let all = app.all_chapter_ids();
        app.start(&all).unwrap();
        app.reveal_all();
        assert!(store.get(STORAGE_KEY).unwrap().is_some());

        app.request_reset();
        assert!(app.confirm_reset);
        app.reset_progress();

        assert!(app.session.completed.is_empty());
        assert!(store.get(STORAGE_KEY).unwrap().is_none());
        assert!(!app.confirm_reset);
        assert_eq!(app.state, AppState::Start);

        let reopened = QuizApp::new(read_bank_embedded().unwrap(), Box::new(store));
        assert_eq!(reopened.progress_counts().0, 0);
    }

    #[test]
    fn cancel_keeps_progress() {
        let mut app = QuizApp::new(read_bank_embedded().unwrap(), Box::new(MemoryStore::default()));
        let all = app.all_chapter_ids();
        app.start(&all).unwrap();
        app.reveal_all();
        app.request_reset();
        app.cancel_reset();
        assert!(!app.confirm_reset);
        assert_eq!(app.progress_counts().0, 1);
        assert_eq!(app.state, AppState::Quiz);
    }
}
