mod helpers;
pub mod layout;
pub mod views;

use crate::app::{QuizApp, UiPrefs};
use crate::model::{AppState, QuestionBank};
use crate::storage::KeyValueStore;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};

impl QuizApp {
    /// Construye la app restaurando las preferencias que eframe guardó.
    pub fn restore(cc: &CreationContext<'_>, bank: QuestionBank, store: Box<dyn KeyValueStore>) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|s| get_value(s, APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });
        QuizApp::new(bank, store).with_prefs(prefs)
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Progreso y borrado arriba, tema abajo
        top_panel(self, ctx);
        bottom_panel(self, ctx);

        match self.state {
            AppState::Start => views::start::ui_start(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }

        if self.confirm_reset {
            self.show_reset_dialog(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
