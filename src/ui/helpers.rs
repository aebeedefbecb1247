// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Hueco de una pregunta. Tapado es un botón; destapado, la respuesta resaltada.
/// Devuelve `true` si se ha pulsado estando tapado.
pub fn blank_chip(ui: &mut Ui, answer: &str, revealed: bool) -> bool {
    if revealed {
        ui.label(RichText::new(answer).strong().color(Color32::from_rgb(80, 170, 255)));
        return false;
    }
    // ancho aproximado a la respuesta, para no dar pistas exactas
    let width = 12.0 * answer.chars().count().clamp(3, 12) as f32;
    ui.add(Button::new("").min_size(Vec2::new(width, 18.0)))
        .on_hover_text("Pulsa para ver la respuesta")
        .clicked()
}
