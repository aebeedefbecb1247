use blank_quiz::QuizApp;
use blank_quiz::config::QuizConfig;
use blank_quiz::data::read_bank_embedded;
use blank_quiz::model::QuestionBank;
use blank_quiz::offline::load_remote_bank;
use blank_quiz::storage::FileStore;

/// Banco remoto (vía caché offline) si está configurado; si falla, el embebido.
fn load_bank(config: &QuizConfig) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    if let Some(url) = &config.bank_url {
        match load_remote_bank(url, &config.cache_dir()) {
            Ok(bank) => return Ok(bank),
            Err(e) => log::warn!("remote question bank unavailable, using embedded one: {e}"),
        }
    }
    Ok(read_bank_embedded()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("data directory: {}", config.data_dir.display());
    let bank = load_bank(&config)?;
    let store = FileStore::new(config.data_dir.clone());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Quiz de huecos",
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::restore(cc, bank, Box::new(store))))),
    )?;
    Ok(())
}
