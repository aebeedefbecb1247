use std::cell::Cell;
use std::collections::BTreeSet;

use blank_quiz::QuizApp;
use blank_quiz::app::QUIZ_LENGTH;
use blank_quiz::app::session::StartOptions;
use blank_quiz::data::{BANK_FILE, parse_bank_bytes, read_bank_embedded};
use blank_quiz::error::FetchError;
use blank_quiz::model::AppState;
use blank_quiz::offline::{CACHE_NAME, CacheStorage, Network, OfflineWorker, PRECACHE_ASSETS, Response, WorkerState};
use blank_quiz::storage::FileStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn full_run_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let bank = read_bank_embedded().unwrap();
    let all: BTreeSet<String> = bank.chapters.keys().cloned().collect();

    let mut app = QuizApp::new(bank.clone(), Box::new(FileStore::new(dir.path())));
    app.start_with_rng(&all, StartOptions::default(), &mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(app.session.questions.len(), QUIZ_LENGTH);

    // destapa todo en las preguntas pares, nada en las impares
    let mut expected = BTreeSet::new();
    for i in 0..QUIZ_LENGTH {
        if i % 2 == 0 {
            expected.insert(app.current_question().unwrap().id.clone());
            app.reveal_all();
        }
        app.advance();
    }
    assert_eq!(app.state, AppState::Summary);
    let summary = app.last_summary.unwrap();
    assert_eq!(summary.attempted, QUIZ_LENGTH);
    assert_eq!(summary.completed, QUIZ_LENGTH / 2);
    assert_eq!(summary.total, bank.len());

    let reopened = QuizApp::new(bank.clone(), Box::new(FileStore::new(dir.path())));
    assert_eq!(reopened.session.completed, expected);

    let mut reopened = reopened;
    reopened.reset_progress();
    let after_reset = QuizApp::new(bank, Box::new(FileStore::new(dir.path())));
    assert!(after_reset.session.completed.is_empty());
}

struct FlakyNetwork {
    body: String,
    online: Cell<bool>,
}

impl Network for &FlakyNetwork {
    fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        if self.online.get() {
            Ok(Response::ok(url, self.body.clone()))
        } else {
            Err(FetchError::Offline)
        }
    }
}

#[test]
fn remote_bank_is_served_offline_after_install() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = "chapters:\n  r: { title: Remoto }\nquestions:\n  - { id: r1, chapter: r, section: s, text: 'a {{b}}' }\n";
    let net = FlakyNetwork {
        body: yaml.to_string(),
        online: Cell::new(true),
    };

    {
        let caches = CacheStorage::on_disk(dir.path()).unwrap();
        let mut worker = OfflineWorker::new(CACHE_NAME, PRECACHE_ASSETS, caches, &net);
        worker.register().unwrap();
        assert_eq!(worker.state(), WorkerState::Active);
    }

    net.online.set(false);
    let caches = CacheStorage::on_disk(dir.path()).unwrap();
    let mut worker = OfflineWorker::new(CACHE_NAME, PRECACHE_ASSETS, caches, &net);
    worker.register().unwrap();
    let resp = worker.fetch(BANK_FILE).unwrap();
    let bank = parse_bank_bytes(resp.body).unwrap();
    assert_eq!(bank.questions[0].id, "r1");
}
