//! Records kept in the flat-file collections

pub mod note;
pub mod task;

pub use note::Note;
pub use task::TaskItem;

/// Collection key for tasks
pub const TASKS_COLLECTION: &str = "tasks";
/// Collection key for notes
pub const NOTES_COLLECTION: &str = "notes";
