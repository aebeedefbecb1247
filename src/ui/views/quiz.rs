use crate::QuizApp;
use crate::blanks::Segment;
use crate::ui::helpers::blank_chip;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Copias para no mantener el borrow de `app` mientras se dibuja
    let Some(question) = app.current_question().cloned() else {
        app.retry();
        return;
    };
    let segments = question.segments();
    let category = app.bank.category_label(&question);
    let position = app.position_label().unwrap_or_default();
    let done = app.all_revealed();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let extra_space = ((ui.available_height() - 260.0) / 2.0).max(0.0);
        ui.add_space(extra_space / 2.0);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);
                    ui.heading(position);
                    ui.weak(category);
                    ui.add_space(12.0);

                    ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = 2.0;
                            for segment in &segments {
                                match segment {
                                    Segment::Text(text) => {
                                        ui.label(RichText::new(text).size(18.0));
                                    }
                                    Segment::Blank(blank) => {
                                        let revealed = app.is_revealed(&blank.id);
                                        if blank_chip(ui, &blank.answer, revealed) {
                                            app.reveal_blank(&blank.id);
                                        }
                                    }
                                }
                            }
                        });
                    });

                    ui.add_space(12.0);
                    if done {
                        ui.label("✅ Pregunta completada");
                        ui.add_space(6.0);
                    }

                    let (mostrar, siguiente) = two_button_row(ui, panel_width, "Mostrar todo", "Siguiente");
                    if mostrar {
                        app.reveal_all();
                    }
                    if siguiente {
                        app.advance();
                    }

                    ui.add_space(6.0);
                    if ui.small_button("📋 Copiar HTML").clicked() {
                        if let Some(html) = app.current_question_html() {
                            ctx.copy_text(html);
                        }
                    }
                });
        });
    });
}
