//! Tasks plugin
//!
//! Every operation is a full read-modify-write of the `tasks` collection.

use super::messages::{ALL_CAUGHT_UP, INVALID_INDEX, NO_TASKS};
use super::plugin_error::PluginError;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::record_store::RecordStore;
use std::sync::Arc;
use taskmate_domain::{PromptTemplate, TASKS_COLLECTION, TaskItem};
use tracing::warn;

/// Default completion budget for a recommendation
pub const DEFAULT_ADVICE_MAX_TOKENS: u32 = 100;

pub struct TaskPlugin<S> {
    store: Arc<S>,
    advisor: Option<Arc<dyn LlmGateway>>,
    advice_max_tokens: u32,
}

impl<S: RecordStore> TaskPlugin<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            advisor: None,
            advice_max_tokens: DEFAULT_ADVICE_MAX_TOKENS,
        }
    }

    /// Ask a language model for next-task recommendations.
    pub fn with_advisor(mut self, advisor: Arc<dyn LlmGateway>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn with_advice_max_tokens(mut self, max_tokens: u32) -> Self {
        self.advice_max_tokens = max_tokens;
        self
    }

    async fn load(&self) -> Result<Vec<TaskItem>, PluginError> {
        Ok(self.store.load(TASKS_COLLECTION).await?)
    }

    pub async fn add_task(&self, title: &str) -> Result<String, PluginError> {
        let mut tasks = self.load().await?;
        tasks.push(TaskItem::new(title));
        self.store.save(TASKS_COLLECTION, &tasks).await?;
        Ok(format!("Task added: {}", title))
    }

    pub async fn list_tasks(&self) -> Result<String, PluginError> {
        let tasks = self.load().await?;
        if tasks.is_empty() {
            return Ok(NO_TASKS.to_string());
        }
        Ok(tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {} {}", i + 1, task.marker(), task.title))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Mark the task at the 1-based `index` as done.
    pub async fn complete_task(&self, index: i64) -> Result<String, PluginError> {
        if index < 1 {
            return Ok(INVALID_INDEX.to_string());
        }

        let mut tasks = self.load().await?;
        let Some(task) = usize::try_from(index - 1)
            .ok()
            .and_then(|i| tasks.get_mut(i))
        else {
            return Ok(INVALID_INDEX.to_string());
        };

        task.done = true;
        let message = format!("Completed: {}", task.title);
        self.store.save(TASKS_COLLECTION, &tasks).await?;
        Ok(message)
    }

    pub async fn recommend_next(&self) -> Result<String, PluginError> {
        let tasks = self.load().await?;
        let Some((position, first_pending)) = tasks.iter().enumerate().find(|(_, t)| !t.done)
        else {
            return Ok(ALL_CAUGHT_UP.to_string());
        };

        if let Some(advisor) = &self.advisor {
            let prompt = PromptTemplate::recommend_next(&tasks);
            match advisor.complete(&prompt, self.advice_max_tokens).await {
                Ok(reply) if !reply.trim().is_empty() => {
                    return Ok(format!("Recommendation: {}", reply.trim()));
                }
                Ok(_) => warn!("Empty recommendation from model, using first pending task"),
                Err(e) => warn!(error = %e, "Recommendation request failed, using first pending task"),
            }
        }

        Ok(format!(
            "Recommendation: task {}: {}",
            position + 1,
            first_pending.title
        ))
    }
}
