//! Keyword rule table for deterministic intent matching.
//!
//! Rules are tested in order against the normalized input and the first match
//! wins, so specific prefixes must come before loose substring rules.
//!
//! | # | Match | Capability | Extraction |
//! |---|-------|------------|------------|
//! | 1 | prefix `add tarefa` / `adicionar tarefa` | AddTask | `title` after "tarefa" |
//! | 2 | exact `listar tarefas` | ListTasks | - |
//! | 3 | prefix `concluir` | CompleteTask | `index` = first integer |
//! | 4 | contains `sugerir` and `proxima` | RecommendNext | - |
//! | 5 | prefix `add nota` / `adicionar nota` | AddNote | `content` after "nota" |
//! | 6 | exact `listar notas` | ListNotes | - |
//! | 7 | prefix `buscar nota` | SearchNotes | `term` after "nota" |
//! | 8 | prefix `resumo` | SummarizeNote | `index` = first integer |
//!
//! Extraction only records what it finds. Missing values (empty text, no
//! digits) are left out so the registry defaults fill them in.

use super::candidate::Arguments;
use super::text::{first_integer, normalize, text_after_keyword};
use crate::capability::Capability;

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Prefix(&'static [&'static str]),
    Exact(&'static str),
    ContainsAll(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::Prefix(prefixes) => prefixes.iter().any(|p| normalized.starts_with(p)),
            Matcher::Exact(text) => normalized == *text,
            Matcher::ContainsAll(words) => words.iter().all(|w| normalized.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Extract {
    Nothing,
    TextAfter {
        param: &'static str,
        keyword: &'static str,
    },
    FirstInteger {
        param: &'static str,
    },
}

impl Extract {
    fn apply(&self, input: &str, arguments: &mut Arguments) {
        match *self {
            Extract::Nothing => {}
            Extract::TextAfter { param, keyword } => {
                let text = text_after_keyword(input, keyword);
                if !text.is_empty() {
                    arguments.insert(param, text);
                }
            }
            Extract::FirstInteger { param } => {
                if let Some(n) = first_integer(input) {
                    arguments.insert(param, n);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct KeywordRule {
    matcher: Matcher,
    capability: Capability,
    extract: Extract,
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        matcher: Matcher::Prefix(&["add tarefa", "adicionar tarefa"]),
        capability: Capability::AddTask,
        extract: Extract::TextAfter {
            param: "title",
            keyword: "tarefa",
        },
    },
    KeywordRule {
        matcher: Matcher::Exact("listar tarefas"),
        capability: Capability::ListTasks,
        extract: Extract::Nothing,
    },
    KeywordRule {
        matcher: Matcher::Prefix(&["concluir"]),
        capability: Capability::CompleteTask,
        extract: Extract::FirstInteger { param: "index" },
    },
    KeywordRule {
        matcher: Matcher::ContainsAll(&["sugerir", "proxima"]),
        capability: Capability::RecommendNext,
        extract: Extract::Nothing,
    },
    KeywordRule {
        matcher: Matcher::Prefix(&["add nota", "adicionar nota"]),
        capability: Capability::AddNote,
        extract: Extract::TextAfter {
            param: "content",
            keyword: "nota",
        },
    },
    KeywordRule {
        matcher: Matcher::Exact("listar notas"),
        capability: Capability::ListNotes,
        extract: Extract::Nothing,
    },
    KeywordRule {
        matcher: Matcher::Prefix(&["buscar nota"]),
        capability: Capability::SearchNotes,
        extract: Extract::TextAfter {
            param: "term",
            keyword: "nota",
        },
    },
    KeywordRule {
        matcher: Matcher::Prefix(&["resumo"]),
        capability: Capability::SummarizeNote,
        extract: Extract::FirstInteger { param: "index" },
    },
];

/// Match an input line against the keyword rules.
///
/// Matching runs on the normalized (trimmed, lowercased) line; extraction
/// reads the trimmed original so titles and notes keep their casing.
pub fn match_keywords(input: &str) -> Option<(Capability, Arguments)> {
    let normalized = normalize(input);
    let original = input.trim();

    let rule = RULES.iter().find(|rule| rule.matcher.matches(&normalized))?;

    let mut arguments = Arguments::new();
    rule.extract.apply(original, &mut arguments);
    Some((rule.capability, arguments))
}
