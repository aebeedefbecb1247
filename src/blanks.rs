// src/blanks.rs

//! Huecos `{{respuesta}}` dentro del texto de una pregunta.
//!
//! Cada hueco recibe un id estable `"<id_pregunta>-<n>"`, numerado por orden
//! de aparición empezando en 0.

use html_escape::{encode_double_quoted_attribute, encode_text};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blank {
    pub id: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Blank(Blank),
}

pub fn blank_id(question_id: &str, index: usize) -> String {
    format!("{question_id}-{index}")
}

/// Separa `text` en literales y huecos.
///
/// La respuesta de un hueco tiene al menos un carácter y no cruza saltos de
/// línea; el cierre es el primer `}}` posible. Un `{{` sin cierre válido se
/// queda como texto literal.
pub fn parse(text: &str, question_id: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;
    let mut index = 0;

    while let Some(open) = rest.find(OPEN) {
        let after = &rest[open + OPEN.len()..];
        match closing_offset(after) {
            Some(close) => {
                literal.push_str(&rest[..open]);
                if !literal.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Blank(Blank {
                    id: blank_id(question_id, index),
                    answer: after[..close].to_string(),
                }));
                index += 1;
                rest = &after[close + CLOSE.len()..];
            }
            None => {
                // '{' es ASCII: open + 1 cae en frontera de carácter
                literal.push_str(&rest[..open + 1]);
                rest = &rest[open + 1..];
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }
    segments
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn closing_offset(after: &str) -> Option<usize> {
    let first = after.chars().next()?;
    if is_line_break(first) {
        return None;
    }
    let from = first.len_utf8();
    let close = after[from..].find(CLOSE)? + from;
    if after[..close].contains(is_line_break) {
        None
    } else {
        Some(close)
    }
}

/// Marcado HTML de la pregunta para incrustarla en una página web, con cada
/// hueco como `<span class="blank">`. Respuestas, ids y texto literal van
/// escapados. La vista de pregunta lo copia al portapapeles.
pub fn render_html(text: &str, question_id: &str) -> String {
    let mut html = String::with_capacity(text.len() * 2);
    for segment in parse(text, question_id) {
        match segment {
            Segment::Text(t) => html.push_str(&encode_text(&t)),
            Segment::Blank(b) => {
                html.push_str("<span class=\"blank\" data-answer=\"");
                html.push_str(&encode_double_quoted_attribute(&b.answer));
                html.push_str("\" data-blank-id=\"");
                html.push_str(&encode_double_quoted_attribute(&b.id));
                html.push_str("\"></span>");
            }
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blanks(text: &str) -> Vec<Blank> {
        parse(text, "q1")
            .into_iter()
            .filter_map(|s| match s {
                Segment::Blank(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn assigns_sequential_ids_per_question() {
        let segs = parse("Un {{int}} ocupa {{4}} bytes", "c1-07");
        assert_eq!(
            segs,
            vec![
                Segment::Text("Un ".into()),
                Segment::Blank(Blank { id: "c1-07-0".into(), answer: "int".into() }),
                Segment::Text(" ocupa ".into()),
                Segment::Blank(Blank { id: "c1-07-1".into(), answer: "4".into() }),
                Segment::Text(" bytes".into()),
            ]
        );
    }

    #[test]
    fn text_without_blanks_is_one_literal() {
        assert_eq!(parse("sin huecos", "q"), vec![Segment::Text("sin huecos".into())]);
        assert!(parse("", "q").is_empty());
    }

    #[test]
    fn closes_at_first_double_brace() {
        let b = blanks("{{a}}b}}");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].answer, "a");
    }

    #[test]
    fn empty_braces_need_at_least_one_char() {
        // igual que `\{\{(.+?)\}\}`: el contenido pasa a ser "}}x"
        let b = blanks("{{}}x}}");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].answer, "}}x");
    }

    #[test]
    fn unterminated_or_multiline_is_literal() {
        assert_eq!(parse("abre {{ y no cierra", "q"), vec![Segment::Text("abre {{ y no cierra".into())]);
        assert!(blanks("{{dos\nlíneas}}").is_empty());
        let b = blanks("{{no\n}} pero {{sí}}");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].answer, "sí");
        assert_eq!(b[0].id, "q1-0");
    }

    #[test]
    fn render_html_escapes_answers() {
        let html = render_html("x {{<b>\"&\"</b>}}", "q");
        assert!(html.starts_with("x <span class=\"blank\" data-answer=\""));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&quot;&amp;&quot;"));
        assert!(html.ends_with("data-blank-id=\"q-0\"></span>"));
    }

    #[test]
    fn render_html_escapes_literal_text() {
        assert_eq!(render_html("a < b", "q"), "a &lt; b");
    }
}
