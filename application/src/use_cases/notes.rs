//! Notes plugin

use super::messages::{INVALID_INDEX, NO_NOTES, NO_NOTES_FOUND, NOTE_PREVIEW_CHARS, NOTE_SAVED, PROVIDE_TERM};
use super::plugin_error::PluginError;
use crate::ports::record_store::RecordStore;
use crate::ports::summarizer::{DeterministicSummarizer, Summarizer};
use std::sync::Arc;
use taskmate_domain::util::truncate_chars;
use taskmate_domain::{NOTES_COLLECTION, Note};

/// Summary length used by `summarize_note`
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 120;

/// Display format of `Note::created_at`
pub const CREATED_AT_FORMAT: &str = "%d/%m %H:%M";

pub struct NotesPlugin<S> {
    store: Arc<S>,
    summarizer: Arc<dyn Summarizer>,
    summary_max_chars: usize,
}

impl<S: RecordStore> NotesPlugin<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            summarizer: Arc::new(DeterministicSummarizer),
            summary_max_chars: DEFAULT_SUMMARY_MAX_CHARS,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn with_summary_max_chars(mut self, max_chars: usize) -> Self {
        self.summary_max_chars = max_chars;
        self
    }

    async fn load(&self) -> Result<Vec<Note>, PluginError> {
        Ok(self.store.load(NOTES_COLLECTION).await?)
    }

    pub async fn add_note(&self, content: &str) -> Result<String, PluginError> {
        let mut notes = self.load().await?;
        let created_at = chrono::Local::now().format(CREATED_AT_FORMAT).to_string();
        notes.push(Note::new(content, created_at));
        self.store.save(NOTES_COLLECTION, &notes).await?;
        Ok(NOTE_SAVED.to_string())
    }

    pub async fn list_notes(&self) -> Result<String, PluginError> {
        let notes = self.load().await?;
        if notes.is_empty() {
            return Ok(NO_NOTES.to_string());
        }
        Ok(notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                format!(
                    "{}. {} - {}",
                    i + 1,
                    note.created_at,
                    truncate_chars(&note.content, NOTE_PREVIEW_CHARS)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Case-insensitive substring search. Hits keep their position in the
    /// full listing so they can be passed to `summarize_note`.
    pub async fn search_notes(&self, term: &str) -> Result<String, PluginError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(PROVIDE_TERM.to_string());
        }

        let notes = self.load().await?;
        let hits = notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.matches(term))
            .map(|(i, note)| {
                format!(
                    "{}. {}",
                    i + 1,
                    truncate_chars(&note.content, NOTE_PREVIEW_CHARS)
                )
            })
            .collect::<Vec<_>>();

        if hits.is_empty() {
            return Ok(NO_NOTES_FOUND.to_string());
        }
        Ok(hits.join("\n"))
    }

    pub async fn summarize_note(&self, index: i64) -> Result<String, PluginError> {
        if index < 1 {
            return Ok(INVALID_INDEX.to_string());
        }

        let notes = self.load().await?;
        let Some(note) = usize::try_from(index - 1).ok().and_then(|i| notes.get(i)) else {
            return Ok(INVALID_INDEX.to_string());
        };

        let summary = self
            .summarizer
            .summarize(&note.content, self.summary_max_chars)
            .await;
        Ok(format!("Summary: {}", summary))
    }
}
