//! Collaborator faults

use crate::ports::record_store::StoreError;
use thiserror::Error;

/// Unexpected failure inside a plugin operation.
///
/// Invalid user arguments are not errors: plugins answer those with a
/// message. The dispatcher renders every `PluginError` as `"Error: ..."`.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
