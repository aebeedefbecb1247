use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::Context;

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 180.0, 480.0, |ui| {
        let width = ui.available_width();
        ui.heading("Resumen de la ronda");
        ui.add_space(10.0);

        match app.last_summary {
            Some(summary) => {
                ui.label(summary.message());
            }
            None => {
                ui.label("No hay datos de esta ronda.");
            }
        }

        ui.add_space(16.0);
        let (otra, borrar) = two_button_row(ui, width, "Otra ronda", "Borrar progreso");
        if otra {
            app.retry();
        }
        if borrar {
            app.request_reset();
        }
    });
}
