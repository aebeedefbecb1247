use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::blanks::{self, Segment};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub chapter: String,
    pub section: String,
    pub text: String, // Texto con huecos {{respuesta}}
}

impl Question {
    /// Trocea el texto en literales y huecos con su id estable.
    pub fn segments(&self) -> Vec<Segment> {
        blanks::parse(&self.text, &self.id)
    }

    pub fn blank_ids(&self) -> Vec<String> {
        self.segments()
            .into_iter()
            .filter_map(|s| match s {
                Segment::Blank(b) => Some(b.id),
                Segment::Text(_) => None,
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub sections: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuestionBank {
    pub chapters: BTreeMap<String, Chapter>,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.get(id)
    }

    /// "Capítulo / Sección" tal y como se muestra encima de la pregunta
    pub fn category_label(&self, question: &Question) -> String {
        match self.chapter(&question.chapter) {
            Some(ch) => {
                let section = ch
                    .sections
                    .get(&question.section)
                    .map(String::as_str)
                    .unwrap_or("");
                format!("{} / {}", ch.title, section)
            }
            None => question.chapter.clone(),
        }
    }

    pub fn questions_in(&self, chapter_id: &str) -> usize {
        self.questions
            .iter()
            .filter(|q| q.chapter == chapter_id)
            .count()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Start,
    Quiz,
    Summary,
}
