//! User-facing messages shared by the plugins and the dispatcher.

/// Shown for anything no resolver could map to a capability
pub const NOT_UNDERSTOOD: &str = "Sorry, I didn't understand. Try: 'add tarefa Buy coffee', \
'listar tarefas', 'add nota idea...', 'buscar nota coffee'.";

pub const INVALID_INDEX: &str = "Invalid index.";

pub const NO_TASKS: &str = "No tasks.";
pub const ALL_CAUGHT_UP: &str = "All caught up!";

pub const NOTE_SAVED: &str = "Note saved.";
pub const NO_NOTES: &str = "No notes.";
pub const NO_NOTES_FOUND: &str = "No notes found.";
pub const PROVIDE_TERM: &str = "Provide a term.";

/// Listing width for note content
pub const NOTE_PREVIEW_CHARS: usize = 80;
