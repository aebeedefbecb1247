pub mod app;
pub mod blanks;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod offline;
pub mod storage;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
