// src/web.rs

use crate::QuizApp;
use crate::data::read_bank_embedded;
use crate::storage::LocalStorageStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Arranca la app sobre el `<canvas id=canvas_id>` de la página.
#[wasm_bindgen]
pub fn start(canvas_id: String) {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = match web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&canvas_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(c) => c,
            None => {
                log::error!("canvas #{canvas_id} not found");
                return;
            }
        };
        let bank = match read_bank_embedded() {
            Ok(b) => b,
            Err(e) => {
                log::error!("invalid embedded question bank: {e}");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(QuizApp::restore(cc, bank, Box::new(LocalStorageStore))))),
            )
            .await;
        if let Err(e) = result {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
