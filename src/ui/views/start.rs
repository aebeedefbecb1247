use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use crate::view_models::ChapterInfo;
use egui::{Color32, Context, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    // Precomputar datos de cada capítulo para no mantener el borrow en la iteración
    let infos: Vec<ChapterInfo> = app.chapter_infos();
    let est_height = 200.0 + 28.0 * infos.len() as f32;

    centered_panel(ctx, est_height, 480.0, |ui| {
        let width = ui.available_width();
        ui.heading("Elige los capítulos");
        ui.add_space(12.0);

        for info in &infos {
            let mut selected = info.selected;
            if ui.checkbox(&mut selected, info.label()).changed() {
                app.toggle_chapter(&info.id);
            }
        }

        ui.add_space(8.0);
        ui.separator();
        ui.checkbox(&mut app.prefs.shuffle, "Barajar preguntas");
        ui.add_space(12.0);

        if big_list_button(ui, "▶ Empezar", width, 40.0, true) {
            if let Err(e) = app.start_from_prefs() {
                // el usuario ya lo ve en app.message
                log::debug!("start rejected: {e}");
            }
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
        }
    });
}
