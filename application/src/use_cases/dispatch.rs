//! Dispatcher: route candidate → plugin operation → user message

use super::messages::NOT_UNDERSTOOD;
use super::notes::NotesPlugin;
use super::plugin_error::PluginError;
use super::tasks::TaskPlugin;
use crate::ports::record_store::RecordStore;
use std::sync::Arc;
use taskmate_domain::{Arguments, Capability, CapabilityRegistry, RouteCandidate};
use tracing::{debug, error};

/// Maps resolved routes onto the Tasks and Notes plugins.
///
/// Never fails: unresolved or unregistered routes become the "not understood"
/// hint and plugin faults become `"Error: ..."`.
pub struct Dispatcher<S> {
    registry: Arc<CapabilityRegistry>,
    tasks: TaskPlugin<S>,
    notes: NotesPlugin<S>,
}

impl<S: RecordStore> Dispatcher<S> {
    pub fn new(
        registry: Arc<CapabilityRegistry>,
        tasks: TaskPlugin<S>,
        notes: NotesPlugin<S>,
    ) -> Self {
        Self {
            registry,
            tasks,
            notes,
        }
    }

    pub async fn execute(&self, candidate: &RouteCandidate) -> String {
        let RouteCandidate::Resolved(route) = candidate else {
            return NOT_UNDERSTOOD.to_string();
        };

        let Some(capability) = self.registry.capability(&route.plugin, &route.function) else {
            debug!(plugin = %route.plugin, function = %route.function, "Route not in registry");
            return NOT_UNDERSTOOD.to_string();
        };

        match self.invoke(capability, &route.arguments).await {
            Ok(message) => message,
            Err(e) => {
                error!(%capability, error = %e, "Plugin operation failed");
                format!("Error: {}", e)
            }
        }
    }

    async fn invoke(
        &self,
        capability: Capability,
        arguments: &Arguments,
    ) -> Result<String, PluginError> {
        match capability {
            Capability::AddTask => self.tasks.add_task(&text_arg(arguments, "title")).await,
            Capability::ListTasks => self.tasks.list_tasks().await,
            Capability::CompleteTask => self.tasks.complete_task(arguments.integer("index")).await,
            Capability::RecommendNext => self.tasks.recommend_next().await,
            Capability::AddNote => self.notes.add_note(&text_arg(arguments, "content")).await,
            Capability::ListNotes => self.notes.list_notes().await,
            Capability::SearchNotes => self.notes.search_notes(&text_arg(arguments, "term")).await,
            Capability::SummarizeNote => {
                self.notes.summarize_note(arguments.integer("index")).await
            }
        }
    }
}

fn text_arg(arguments: &Arguments, key: &str) -> String {
    arguments.text_lossy(key).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailingStore, MemoryStore};
    use taskmate_domain::Route;

    fn dispatcher() -> Dispatcher<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        Dispatcher::new(
            Arc::new(CapabilityRegistry::builtin()),
            TaskPlugin::new(store.clone()),
            NotesPlugin::new(store),
        )
    }

    fn route(plugin: &str, function: &str, arguments: Arguments) -> RouteCandidate {
        RouteCandidate::Resolved(Route {
            plugin: plugin.to_string(),
            function: function.to_string(),
            arguments,
        })
    }

    #[tokio::test]
    async fn test_unresolved_is_not_understood() {
        let message = dispatcher().execute(&RouteCandidate::Unresolved).await;
        assert_eq!(message, NOT_UNDERSTOOD);
    }

    #[tokio::test]
    async fn test_unregistered_route_is_not_understood() {
        let d = dispatcher();
        let message = d.execute(&route("Tasks", "DropTable", Arguments::new())).await;
        assert_eq!(message, NOT_UNDERSTOOD);
        let message = d.execute(&route("Mail", "AddTask", Arguments::new())).await;
        assert_eq!(message, NOT_UNDERSTOOD);
    }

    #[tokio::test]
    async fn test_index_coercion() {
        let d = dispatcher();
        d.execute(&RouteCandidate::resolved(
            Capability::AddTask,
            Arguments::new().with("title", "Buy coffee"),
        ))
        .await;

        let done = d
            .execute(&RouteCandidate::resolved(
                Capability::CompleteTask,
                Arguments::new().with("index", "1"),
            ))
            .await;
        assert_eq!(done, "Completed: Buy coffee");

        for arguments in [
            Arguments::new(),
            Arguments::new().with("index", "first"),
            Arguments::new().with("index", -1),
        ] {
            let message = d
                .execute(&RouteCandidate::resolved(Capability::CompleteTask, arguments))
                .await;
            assert_eq!(message, "Invalid index.");
        }
    }

    #[tokio::test]
    async fn test_extra_arguments_are_ignored() {
        let d = dispatcher();
        let message = d
            .execute(&RouteCandidate::resolved(
                Capability::ListTasks,
                Arguments::new().with("verbose", true),
            ))
            .await;
        assert_eq!(message, "No tasks.");
    }

    #[tokio::test]
    async fn test_case_insensitive_route_names() {
        let d = dispatcher();
        let message = d.execute(&route("notes", "listnotes", Arguments::new())).await;
        assert_eq!(message, "No notes.");
    }

    #[tokio::test]
    async fn test_store_fault_becomes_error_message() {
        let store = Arc::new(FailingStore);
        let d = Dispatcher::new(
            Arc::new(CapabilityRegistry::builtin()),
            TaskPlugin::new(store.clone()),
            NotesPlugin::new(store),
        );
        let message = d
            .execute(&RouteCandidate::resolved(Capability::ListTasks, Arguments::new()))
            .await;
        assert!(message.starts_with("Error: "), "{}", message);
        assert!(message.contains("disk unavailable"));
    }
}
