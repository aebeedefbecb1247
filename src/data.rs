// src/data.rs

use crate::error::BankError;
use crate::model::QuestionBank;
use std::collections::HashSet;

pub const BANK_FILE: &str = "question_bank.yaml";

const EMBEDDED_BANK: &str = include_str!("data/question_bank.yaml");

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_bank_embedded() -> Result<QuestionBank, BankError> {
    parse_bank(EMBEDDED_BANK)
}

pub fn parse_bank(yaml: &str) -> Result<QuestionBank, BankError> {
    let bank: QuestionBank = serde_yaml::from_str(yaml)?;
    validate(&bank)?;
    Ok(bank)
}

pub fn parse_bank_bytes(bytes: Vec<u8>) -> Result<QuestionBank, BankError> {
    parse_bank(&String::from_utf8(bytes)?)
}

fn validate(bank: &QuestionBank) -> Result<(), BankError> {
    let mut seen = HashSet::new();
    for q in &bank.questions {
        if !bank.chapters.contains_key(&q.chapter) {
            return Err(BankError::UnknownChapter {
                question: q.id.clone(),
                chapter: q.chapter.clone(),
            });
        }
        if !seen.insert(q.id.as_str()) {
            return Err(BankError::DuplicateId(q.id.clone()));
        }
    }
    Ok(())
}
